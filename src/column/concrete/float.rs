//! Single-precision floating point column.

use crate::binder::StatementBinder;
use crate::column::{column_struct, literal, numeric, ColumnInternal, ColumnKind, ColumnMeta};
use crate::error::{BindError, ConversionError};
use sea_query::Value;

column_struct!(
    /// `f32` column stored as SQLite `FLOAT` (REAL affinity).
    ///
    /// SQLite has no single-precision storage, so values are widened to `f64`
    /// both when bound and when rendered; the widening is exact.
    FloatColumn
);

impl ColumnInternal for FloatColumn {
    type Native = f32;

    const KIND: ColumnKind = ColumnKind::Float;
    const SQL_TYPE: &'static str = "FLOAT";

    fn meta(&self) -> &ColumnMeta {
        &self.meta
    }

    fn to_column_type(&self, value: &Value) -> Result<f32, ConversionError> {
        numeric::to_f32(Self::KIND, value, &self.meta.config)
    }

    fn to_value(&self, native: f32) -> Value {
        Value::Float(Some(native))
    }

    fn default_native(&self) -> f32 {
        0.0
    }

    fn stores_as_null(&self, native: &f32) -> bool {
        self.meta.config.nan_as_null && native.is_nan()
    }

    fn validate(&self, native: &f32) -> Result<(), ConversionError> {
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
        native: f32,
    ) -> Result<(), BindError> {
        stmt.bind_double(index, f64::from(native))
    }

    fn literal(&self, native: &f32) -> Result<String, ConversionError> {
        literal::real(f64::from(*native)).ok_or_else(|| ConversionError::NotRepresentable {
            kind: Self::KIND,
            reason: "SQLite has no NaN literal".to_string(),
        })
    }
}
