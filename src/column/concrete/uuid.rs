//! UUID column.

use crate::binder::StatementBinder;
use crate::column::{column_struct, mismatch, ColumnInternal, ColumnKind, ColumnMeta};
use crate::error::{BindError, ConversionError};
use sea_query::Value;
use uuid::Uuid;

column_struct!(
    /// `Uuid` column stored as lowercase hyphenated `TEXT`
    UuidColumn
);

impl ColumnInternal for UuidColumn {
    type Native = Uuid;

    const KIND: ColumnKind = ColumnKind::Uuid;
    // TEXT affinity, so SQLite never tries to read the value as a number
    const SQL_TYPE: &'static str = "TEXT";

    fn meta(&self) -> &ColumnMeta {
        &self.meta
    }

    fn to_column_type(&self, value: &Value) -> Result<Uuid, ConversionError> {
        match value {
            Value::Uuid(Some(uuid)) => Ok(*uuid),
            Value::String(Some(text)) => {
                Uuid::parse_str(text.trim()).map_err(|err| ConversionError::InvalidText {
                    expected: Self::KIND,
                    text: text.clone(),
                    reason: err.to_string(),
                })
            }
            _ => Err(mismatch(Self::KIND, value)),
        }
    }

    fn to_value(&self, native: Uuid) -> Value {
        Value::Uuid(Some(native))
    }

    fn default_native(&self) -> Uuid {
        Uuid::nil()
    }

    fn bind_native(
        &self,
        stmt: &mut dyn StatementBinder,
        index: usize,
        native: Uuid,
    ) -> Result<(), BindError> {
        stmt.bind_text(index, &native.hyphenated().to_string())
    }

    fn literal(&self, native: &Uuid) -> Result<String, ConversionError> {
        Ok(format!("'{}'", native.hyphenated()))
    }
}
