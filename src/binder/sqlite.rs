//! `StatementBinder` over `rusqlite` prepared statements.
//!
//! Uses `raw_bind_parameter`, which goes straight to `sqlite3_bind_*`, so any
//! failure carries SQLite's own extended result code.

use super::StatementBinder;
use crate::error::BindError;
use rusqlite::types::Null;
use rusqlite::Statement;

impl StatementBinder for Statement<'_> {
    fn parameter_count(&self) -> Option<usize> {
        Some(Statement::parameter_count(self))
    }

    fn bind_null(&mut self, index: usize) -> Result<(), BindError> {
        Ok(self.raw_bind_parameter(index, Null)?)
    }

    fn bind_double(&mut self, index: usize, value: f64) -> Result<(), BindError> {
        Ok(self.raw_bind_parameter(index, value)?)
    }

    fn bind_int(&mut self, index: usize, value: i32) -> Result<(), BindError> {
        Ok(self.raw_bind_parameter(index, value)?)
    }

    fn bind_int64(&mut self, index: usize, value: i64) -> Result<(), BindError> {
        Ok(self.raw_bind_parameter(index, value)?)
    }

    fn bind_text(&mut self, index: usize, value: &str) -> Result<(), BindError> {
        Ok(self.raw_bind_parameter(index, value)?)
    }

    fn bind_blob(&mut self, index: usize, value: &[u8]) -> Result<(), BindError> {
        Ok(self.raw_bind_parameter(index, value)?)
    }
}
