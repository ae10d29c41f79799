//! Statement binding targets.
//!
//! `StatementBinder` mirrors SQLite's typed `sqlite3_bind_*` primitives. Columns
//! convert a dynamic value to their native kind and then call exactly one of
//! these methods. Parameter indexes are 1-based.
//!
//! # Structure
//!
//! - `buffer`: `ParameterBuffer`, an in-memory binder that records bound parameters
//! - `sqlite`: `StatementBinder` for `rusqlite::Statement` (feature `sqlite`)

mod buffer;
#[cfg(feature = "sqlite")]
mod sqlite;

pub use buffer::{BoundParameter, ParameterBuffer};

use crate::error::BindError;

/// Typed bind primitives of a prepared statement.
///
/// Implementations are borrowed for a single call; the caller owns the
/// statement and must not mutate it concurrently.
pub trait StatementBinder {
    /// Number of parameter slots, when the engine knows it
    fn parameter_count(&self) -> Option<usize> {
        None
    }

    fn bind_null(&mut self, index: usize) -> Result<(), BindError>;

    fn bind_double(&mut self, index: usize, value: f64) -> Result<(), BindError>;

    fn bind_int(&mut self, index: usize, value: i32) -> Result<(), BindError>;

    fn bind_int64(&mut self, index: usize, value: i64) -> Result<(), BindError>;

    fn bind_text(&mut self, index: usize, value: &str) -> Result<(), BindError>;

    fn bind_blob(&mut self, index: usize, value: &[u8]) -> Result<(), BindError>;
}
