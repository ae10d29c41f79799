//! Boolean column.

use crate::binder::StatementBinder;
use crate::column::{column_struct, mismatch, ColumnInternal, ColumnKind, ColumnMeta};
use crate::error::{BindError, ConversionError};
use crate::value::as_integer;
use sea_query::Value;

column_struct!(
    /// `bool` column stored as SQLite integers `0` and `1`
    BooleanColumn
);

impl ColumnInternal for BooleanColumn {
    type Native = bool;

    const KIND: ColumnKind = ColumnKind::Boolean;
    const SQL_TYPE: &'static str = "BOOLEAN";

    fn meta(&self) -> &ColumnMeta {
        &self.meta
    }

    fn to_column_type(&self, value: &Value) -> Result<bool, ConversionError> {
        match value {
            Value::Bool(Some(b)) => Ok(*b),
            Value::String(Some(text)) if self.meta.config.numeric_text => {
                match text.trim() {
                    "1" | "true" => Ok(true),
                    "0" | "false" => Ok(false),
                    _ => Err(ConversionError::InvalidText {
                        expected: Self::KIND,
                        text: text.clone(),
                        reason: "expected 0, 1, true or false".to_string(),
                    }),
                }
            }
            // SQLite hands booleans back as 0/1 integers
            _ => match as_integer(value) {
                Some(0) => Ok(false),
                Some(1) => Ok(true),
                Some(other) => Err(ConversionError::OutOfRange {
                    expected: Self::KIND,
                    value: other.to_string(),
                }),
                None => Err(mismatch(Self::KIND, value)),
            },
        }
    }

    fn to_value(&self, native: bool) -> Value {
        Value::Bool(Some(native))
    }

    fn default_native(&self) -> bool {
        false
    }

    fn bind_native(
        &self,
        stmt: &mut dyn StatementBinder,
        index: usize,
        native: bool,
    ) -> Result<(), BindError> {
        stmt.bind_int(index, i32::from(native))
    }

    fn literal(&self, native: &bool) -> Result<String, ConversionError> {
        Ok(if *native { "1" } else { "0" }.to_string())
    }
}
