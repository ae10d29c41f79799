//! # Lifeguard Columns
//!
//! Typed column conversions for the Lifeguard ORM's SQLite backend.
//!
//! Each column knows how to turn a dynamically typed `sea_query::Value` from the
//! record layer into its native Rust type, bind it to a prepared statement,
//! render it as a SQL literal, and produce its default value.
//!
//! ```
//! use lifeguard_columns::{record, Column, DoubleColumn, ParameterBuffer, BoundParameter};
//! use sea_query::Value;
//!
//! let price = DoubleColumn::new("price");
//! let mut stmt = ParameterBuffer::new(1);
//! price.bind(&mut stmt, 1, &Value::Double(Some(3.14))).unwrap();
//! assert_eq!(stmt.get(1), Some(&BoundParameter::Double(3.14)));
//!
//! assert_eq!(price.sql_value_from_record(&record! {}).unwrap(), "NULL");
//! ```

pub mod binder;
pub mod column;
pub mod config;
pub mod error;
mod macros;
pub mod record;
pub mod schema;
pub mod value;

pub use binder::{BoundParameter, ParameterBuffer, StatementBinder};
pub use column::{
    BigIntegerColumn, BlobColumn, BooleanColumn, Column, ColumnInternal, ColumnKind, ColumnMeta,
    DateColumn, DateTimeColumn, DecimalColumn, DoubleColumn, FloatColumn, IntegerColumn,
    JsonColumn, TextColumn, UuidColumn,
};
pub use crate::config::ColumnConfig;
pub use error::{BindError, ColumnError, ConversionError, SchemaError};
pub use record::Record;
pub use schema::{SchemaRegistry, TableSchema, TableSchemaBuilder};

// Records hold `sea_query::Value`s; re-exported for `record!`
pub use sea_query;
