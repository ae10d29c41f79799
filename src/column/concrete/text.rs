//! Text column.

use crate::binder::StatementBinder;
use crate::column::{column_struct, literal, mismatch, ColumnInternal, ColumnKind, ColumnMeta};
use crate::error::{BindError, ConversionError};
use sea_query::Value;

column_struct!(
    /// `String` column stored as SQLite `TEXT`
    TextColumn
);

impl ColumnInternal for TextColumn {
    type Native = String;

    const KIND: ColumnKind = ColumnKind::Text;
    const SQL_TYPE: &'static str = "TEXT";

    fn meta(&self) -> &ColumnMeta {
        &self.meta
    }

    fn to_column_type(&self, value: &Value) -> Result<String, ConversionError> {
        match value {
            Value::String(Some(text)) => Ok(text.clone()),
            Value::Char(Some(c)) => Ok(c.to_string()),
            _ => Err(mismatch(Self::KIND, value)),
        }
    }

    fn to_value(&self, native: String) -> Value {
        Value::String(Some(native))
    }

    fn default_native(&self) -> String {
        String::new()
    }

    fn bind_native(
        &self,
        stmt: &mut dyn StatementBinder,
        index: usize,
        native: String,
    ) -> Result<(), BindError> {
        stmt.bind_text(index, &native)
    }

    fn literal(&self, native: &String) -> Result<String, ConversionError> {
        literal::text(native).ok_or_else(|| ConversionError::NotRepresentable {
            kind: Self::KIND,
            reason: "text contains a NUL character".to_string(),
        })
    }
}
