//! Binary column.

use crate::binder::StatementBinder;
use crate::column::{column_struct, literal, mismatch, ColumnInternal, ColumnKind, ColumnMeta};
use crate::error::{BindError, ConversionError};
use sea_query::Value;

column_struct!(
    /// `Vec<u8>` column stored as SQLite `BLOB`
    BlobColumn
);

impl ColumnInternal for BlobColumn {
    type Native = Vec<u8>;

    const KIND: ColumnKind = ColumnKind::Blob;
    const SQL_TYPE: &'static str = "BLOB";

    fn meta(&self) -> &ColumnMeta {
        &self.meta
    }

    fn to_column_type(&self, value: &Value) -> Result<Vec<u8>, ConversionError> {
        match value {
            Value::Bytes(Some(bytes)) => Ok(bytes.clone()),
            _ => Err(mismatch(Self::KIND, value)),
        }
    }

    fn to_value(&self, native: Vec<u8>) -> Value {
        Value::Bytes(Some(native))
    }

    fn default_native(&self) -> Vec<u8> {
        Vec::new()
    }

    fn bind_native(
        &self,
        stmt: &mut dyn StatementBinder,
        index: usize,
        native: Vec<u8>,
    ) -> Result<(), BindError> {
        stmt.bind_blob(index, &native)
    }

    fn literal(&self, native: &Vec<u8>) -> Result<String, ConversionError> {
        Ok(literal::blob(native))
    }
}
