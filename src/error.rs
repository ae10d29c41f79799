//! Error types for column conversion, binding and schema registration.
//!
//! Conversion and bind failures are always returned to the caller. Nothing in
//! this crate retries or recovers; whether a failure aborts a save or falls
//! back to a default is the record layer's decision.

use crate::column::ColumnKind;
use std::fmt;

/// A dynamic value could not be interpreted as a column's native kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// The value's runtime variant is incompatible with the column kind
    TypeMismatch {
        expected: ColumnKind,
        actual: &'static str,
    },
    /// A null value was handed to a conversion that needs a concrete value
    NullValue { expected: ColumnKind },
    /// The value does not fit into the native type
    OutOfRange { expected: ColumnKind, value: String },
    /// The value would only fit by dropping digits (fraction, mantissa bits)
    LossOfPrecision { expected: ColumnKind, value: String },
    /// Text that should hold the kind's storage form failed to parse
    InvalidText {
        expected: ColumnKind,
        text: String,
        reason: String,
    },
    /// The native value has no valid representation in the engine
    NotRepresentable { kind: ColumnKind, reason: String },
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::TypeMismatch { expected, actual } => {
                write!(f, "Type mismatch: expected {expected}, got {actual}")
            }
            ConversionError::NullValue { expected } => {
                write!(f, "Null value where {expected} was required")
            }
            ConversionError::OutOfRange { expected, value } => {
                write!(f, "Value {value} is out of range for {expected}")
            }
            ConversionError::LossOfPrecision { expected, value } => {
                write!(f, "Value {value} cannot be stored as {expected} without loss")
            }
            ConversionError::InvalidText {
                expected,
                text,
                reason,
            } => write!(f, "Invalid {expected} text {text:?}: {reason}"),
            ConversionError::NotRepresentable { kind, reason } => {
                write!(f, "{kind} value not representable: {reason}")
            }
        }
    }
}

impl std::error::Error for ConversionError {}

/// The storage engine rejected a bind call.
///
/// `code` is the engine's result code, passed through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindError {
    pub code: i32,
    pub message: String,
}

impl BindError {
    /// `SQLITE_MISUSE`
    pub const MISUSE: i32 = 21;
    /// `SQLITE_RANGE`
    pub const RANGE: i32 = 25;

    pub fn new(code: i32, message: impl Into<String>) -> Self {
        BindError {
            code,
            message: message.into(),
        }
    }

    pub(crate) fn out_of_range(index: usize, count: usize) -> Self {
        BindError::new(
            Self::RANGE,
            format!("parameter index {index} out of range (1..={count})"),
        )
    }
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bind failed (code {}): {}", self.code, self.message)
    }
}

impl std::error::Error for BindError {}

#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for BindError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(inner, message) => BindError {
                code: inner.extended_code,
                message: message.unwrap_or_else(|| inner.to_string()),
            },
            other => BindError::new(Self::MISUSE, other.to_string()),
        }
    }
}

/// A column operation failed, tagged with the column it failed on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnError {
    Conversion {
        column: String,
        source: ConversionError,
    },
    Bind {
        column: String,
        index: usize,
        source: BindError,
    },
}

impl ColumnError {
    /// Name of the column the operation failed on
    #[must_use]
    pub fn column(&self) -> &str {
        match self {
            ColumnError::Conversion { column, .. } | ColumnError::Bind { column, .. } => column,
        }
    }

    #[must_use]
    pub fn is_conversion(&self) -> bool {
        matches!(self, ColumnError::Conversion { .. })
    }

    #[must_use]
    pub fn is_bind(&self) -> bool {
        matches!(self, ColumnError::Bind { .. })
    }
}

impl fmt::Display for ColumnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnError::Conversion { column, source } => {
                write!(f, "Column {column}: {source}")
            }
            ColumnError::Bind {
                column,
                index,
                source,
            } => write!(f, "Column {column} (parameter {index}): {source}"),
        }
    }
}

impl std::error::Error for ColumnError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ColumnError::Conversion { source, .. } => Some(source),
            ColumnError::Bind { source, .. } => Some(source),
        }
    }
}

/// Error type for building table schemas and the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A table was declared without columns
    EmptyTable(String),
    /// The same column name was declared twice in one table
    DuplicateColumn { table: String, column: String },
    /// The registry already holds a table with this name
    DuplicateTable(String),
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::EmptyTable(table) => write!(f, "Table {table} has no columns"),
            SchemaError::DuplicateColumn { table, column } => {
                write!(f, "Column {column} declared twice in table {table}")
            }
            SchemaError::DuplicateTable(table) => {
                write!(f, "Table {table} is already registered")
            }
        }
    }
}

impl std::error::Error for SchemaError {}
