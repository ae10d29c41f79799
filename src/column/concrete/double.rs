//! Double-precision floating point column.

use crate::binder::StatementBinder;
use crate::column::{column_struct, literal, numeric, ColumnInternal, ColumnKind, ColumnMeta};
use crate::error::{BindError, ConversionError};
use sea_query::Value;

column_struct!(
    /// `f64` column stored as SQLite `DOUBLE` (REAL affinity)
    DoubleColumn
);

impl ColumnInternal for DoubleColumn {
    type Native = f64;

    const KIND: ColumnKind = ColumnKind::Double;
    const SQL_TYPE: &'static str = "DOUBLE";

    fn meta(&self) -> &ColumnMeta {
        &self.meta
    }

    fn to_column_type(&self, value: &Value) -> Result<f64, ConversionError> {
        numeric::to_f64(Self::KIND, value, &self.meta.config)
    }

    fn to_value(&self, native: f64) -> Value {
        Value::Double(Some(native))
    }

    fn default_native(&self) -> f64 {
        0.0
    }

    fn stores_as_null(&self, native: &f64) -> bool {
        self.meta.config.nan_as_null && native.is_nan()
    }

    fn validate(&self, native: &f64) -> Result<(), ConversionError> {
        if native.is_nan() {
            return Err(ConversionError::NotRepresentable {
                kind: Self::KIND,
                reason: "SQLite cannot store NaN".to_string(),
            });
        }
        Ok(())
    }

    fn bind_native(
        &self,
        stmt: &mut dyn StatementBinder,
        index: usize,
        native: f64,
    ) -> Result<(), BindError> {
        stmt.bind_double(index, native)
    }

    fn literal(&self, native: &f64) -> Result<String, ConversionError> {
        literal::real(*native).ok_or_else(|| ConversionError::NotRepresentable {
            kind: Self::KIND,
            reason: "SQLite has no NaN literal".to_string(),
        })
    }
}
