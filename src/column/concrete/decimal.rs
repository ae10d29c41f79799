//! Fixed-point decimal column.

use crate::binder::StatementBinder;
use crate::column::{column_struct, mismatch, ColumnInternal, ColumnKind, ColumnMeta};
use crate::error::{BindError, ConversionError};
use crate::value::as_integer;
use rust_decimal::Decimal;
use sea_query::Value;
use std::str::FromStr;

column_struct!(
    /// `Decimal` column stored as `TEXT` so scale and every digit survive.
    ///
    /// A `DECIMAL` declaration would give the column NUMERIC affinity and
    /// SQLite would rewrite `'12.50'` into the REAL `12.5`.
    DecimalColumn
);

impl ColumnInternal for DecimalColumn {
    type Native = Decimal;

    const KIND: ColumnKind = ColumnKind::Decimal;
    const SQL_TYPE: &'static str = "TEXT";

    fn meta(&self) -> &ColumnMeta {
        &self.meta
    }

    fn to_column_type(&self, value: &Value) -> Result<Decimal, ConversionError> {
        match value {
            Value::Decimal(Some(decimal)) => Ok(*decimal),
            Value::String(Some(text)) => {
                Decimal::from_str(text.trim()).map_err(|err| ConversionError::InvalidText {
                    expected: Self::KIND,
                    text: text.clone(),
                    reason: err.to_string(),
                })
            }
            _ => {
                let wide = as_integer(value).ok_or_else(|| mismatch(Self::KIND, value))?;
                Decimal::try_from_i128_with_scale(wide, 0).map_err(|_| {
                    ConversionError::OutOfRange {
                        expected: Self::KIND,
                        value: wide.to_string(),
                    }
                })
            }
        }
    }

    fn to_value(&self, native: Decimal) -> Value {
        Value::Decimal(Some(native))
    }

    fn default_native(&self) -> Decimal {
        Decimal::ZERO
    }

    fn bind_native(
        &self,
        stmt: &mut dyn StatementBinder,
        index: usize,
        native: Decimal,
    ) -> Result<(), BindError> {
        stmt.bind_text(index, &native.to_string())
    }

    fn literal(&self, native: &Decimal) -> Result<String, ConversionError> {
        Ok(format!("'{native}'"))
    }
}
