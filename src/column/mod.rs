//! Typed columns.
//!
//! Every concrete column implements [`ColumnInternal`], the contract
//! parameterized over its native Rust type. The object-safe [`Column`] trait is
//! blanket-implemented on top of it so schemas can hold mixed columns behind
//! `Arc<dyn Column>` and dispatch without knowing the concrete kind.
//!
//! # Structure
//!
//! - `concrete`: one column type per native kind
//! - `literal`: SQLite literal formatting
//! - `numeric`: lossless numeric narrowing shared by the numeric columns

/// Generates the struct and constructors every concrete column shares
macro_rules! column_struct {
    ($(#[$attr:meta])* $column:ident) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $column {
            meta: $crate::column::ColumnMeta,
        }

        impl $column {
            pub fn new(name: impl Into<String>) -> Self {
                Self::with_config(name, $crate::config::ColumnConfig::default())
            }

            pub fn with_config(name: impl Into<String>, config: $crate::config::ColumnConfig) -> Self {
                $column {
                    meta: $crate::column::ColumnMeta::new(name, config),
                }
            }
        }
    };
}

pub(crate) use column_struct;

pub mod concrete;
pub(crate) mod literal;
pub(crate) mod numeric;

pub use concrete::{
    BigIntegerColumn, BlobColumn, BooleanColumn, DateColumn, DateTimeColumn, DecimalColumn,
    DoubleColumn, FloatColumn, IntegerColumn, JsonColumn, TextColumn, UuidColumn,
};

use crate::binder::StatementBinder;
use crate::config::ColumnConfig;
use crate::error::{BindError, ColumnError, ConversionError};
use crate::record::Record;
use crate::value;
use sea_query::Value;
use std::fmt;

/// Native value kind a column is declared with.
///
/// Informational only: dispatch goes through the [`Column`] trait, never through
/// a match on this tag. Columns defined outside this crate name their kind with
/// [`ColumnKind::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ColumnKind {
    Double,
    Float,
    Integer,
    BigInteger,
    Boolean,
    Text,
    Date,
    DateTime,
    Blob,
    Uuid,
    Decimal,
    Json,
    Other(&'static str),
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnKind::Double => "DOUBLE",
            ColumnKind::Float => "FLOAT",
            ColumnKind::Integer => "INTEGER",
            ColumnKind::BigInteger => "BIGINT",
            ColumnKind::Boolean => "BOOLEAN",
            ColumnKind::Text => "TEXT",
            ColumnKind::Date => "DATE",
            ColumnKind::DateTime => "DATETIME",
            ColumnKind::Blob => "BLOB",
            ColumnKind::Uuid => "UUID",
            ColumnKind::Decimal => "DECIMAL",
            ColumnKind::Json => "JSON",
            ColumnKind::Other(name) => *name,
        };
        f.write_str(name)
    }
}

/// Name and conversion settings shared by every concrete column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMeta {
    pub name: String,
    pub config: ColumnConfig,
}

impl ColumnMeta {
    pub fn new(name: impl Into<String>, config: ColumnConfig) -> Self {
        ColumnMeta {
            name: name.into(),
            config,
        }
    }
}

/// Conversion contract for one native kind.
///
/// Implementors supply the pure conversions and the single engine primitive
/// their kind binds through; null handling, error tagging and record lookup
/// come from the blanket [`Column`] implementation.
pub trait ColumnInternal: fmt::Debug + Send + Sync {
    type Native;

    const KIND: ColumnKind;

    /// Declared type used in `CREATE TABLE`
    const SQL_TYPE: &'static str;

    fn meta(&self) -> &ColumnMeta;

    /// Interpret a non-null dynamic value as the native kind
    fn to_column_type(&self, value: &Value) -> Result<Self::Native, ConversionError>;

    /// Wrap a native value back into the dynamic representation
    fn to_value(&self, native: Self::Native) -> Value;

    /// Zero or empty value for the kind
    fn default_native(&self) -> Self::Native;

    /// Whether a native value must be stored as SQL `NULL` (NaN with `nan_as_null`)
    fn stores_as_null(&self, _native: &Self::Native) -> bool {
        false
    }

    /// Reject native values the engine cannot store faithfully
    fn validate(&self, _native: &Self::Native) -> Result<(), ConversionError> {
        Ok(())
    }

    /// Call the engine's typed bind primitive for this kind
    fn bind_native(
        &self,
        stmt: &mut dyn StatementBinder,
        index: usize,
        native: Self::Native,
    ) -> Result<(), BindError>;

    /// Render a native value as a SQL literal
    fn literal(&self, native: &Self::Native) -> Result<String, ConversionError>;
}

/// Uniform, object-safe column handle.
///
/// Column descriptors are immutable once built and may be shared across
/// threads. Statements and records are borrowed per call.
pub trait Column: fmt::Debug + Send + Sync {
    fn name(&self) -> &str;

    fn kind(&self) -> ColumnKind;

    fn sql_type(&self) -> &'static str;

    /// Convert `value` and attach it to the 1-based parameter slot `index`.
    ///
    /// Null values bind SQL `NULL`. A conversion failure returns before the
    /// engine is touched.
    fn bind(
        &self,
        stmt: &mut dyn StatementBinder,
        index: usize,
        value: &Value,
    ) -> Result<(), ColumnError>;

    /// Render a value as a SQL literal; absent and null values render `NULL`
    fn sql_value(&self, value: Option<&Value>) -> Result<String, ConversionError>;

    /// Read this column's attribute from `record` and render it as a SQL literal
    fn sql_value_from_record(&self, record: &dyn Record) -> Result<String, ColumnError> {
        self.sql_value(record.attribute(self.name()))
            .map_err(|source| ColumnError::Conversion {
                column: self.name().to_string(),
                source,
            })
    }

    /// Dynamic form of the kind's default value
    fn default_value(&self) -> Value;

    /// Coerce a dynamic value into this column's canonical variant; nulls pass through
    fn normalize(&self, value: &Value) -> Result<Value, ConversionError>;
}

impl<C: ColumnInternal> Column for C {
    fn name(&self) -> &str {
        &self.meta().name
    }

    fn kind(&self) -> ColumnKind {
        C::KIND
    }

    fn sql_type(&self) -> &'static str {
        C::SQL_TYPE
    }

    fn bind(
        &self,
        stmt: &mut dyn StatementBinder,
        index: usize,
        value: &Value,
    ) -> Result<(), ColumnError> {
        let bind_error = |source| ColumnError::Bind {
            column: self.meta().name.clone(),
            index,
            source,
        };
        if value::is_null(value) {
            return stmt.bind_null(index).map_err(bind_error);
        }
        let native = self
            .to_column_type(value)
            .map_err(|source| ColumnError::Conversion {
                column: self.meta().name.clone(),
                source,
            })?;
        if self.stores_as_null(&native) {
            return stmt.bind_null(index).map_err(bind_error);
        }
        self.validate(&native)
            .map_err(|source| ColumnError::Conversion {
                column: self.meta().name.clone(),
                source,
            })?;
        self.bind_native(stmt, index, native).map_err(bind_error)
    }

    fn sql_value(&self, value: Option<&Value>) -> Result<String, ConversionError> {
        let Some(value) = value.filter(|value| !value::is_null(value)) else {
            return Ok(literal::NULL.to_string());
        };
        let native = self.to_column_type(value)?;
        if self.stores_as_null(&native) {
            return Ok(literal::NULL.to_string());
        }
        self.validate(&native)?;
        self.literal(&native)
    }

    fn default_value(&self) -> Value {
        self.to_value(self.default_native())
    }

    fn normalize(&self, value: &Value) -> Result<Value, ConversionError> {
        if value::is_null(value) {
            return Ok(value.clone());
        }
        Ok(self.to_value(self.to_column_type(value)?))
    }
}

/// Error for a variant the column does not accept at all
pub(crate) fn mismatch(expected: ColumnKind, value: &Value) -> ConversionError {
    if value::is_null(value) {
        ConversionError::NullValue { expected }
    } else {
        ConversionError::TypeMismatch {
            expected,
            actual: value::variant_name(value),
        }
    }
}
