//! 32-bit integer column.

use crate::binder::StatementBinder;
use crate::column::{column_struct, numeric, ColumnInternal, ColumnKind, ColumnMeta};
use crate::error::{BindError, ConversionError};
use sea_query::Value;

column_struct!(
    /// `i32` column stored as SQLite `INTEGER`
    IntegerColumn
);

impl ColumnInternal for IntegerColumn {
    type Native = i32;

    const KIND: ColumnKind = ColumnKind::Integer;
    const SQL_TYPE: &'static str = "INTEGER";

    fn meta(&self) -> &ColumnMeta {
        &self.meta
    }

    fn to_column_type(&self, value: &Value) -> Result<i32, ConversionError> {
        numeric::to_integer(Self::KIND, value, &self.meta.config)
    }

    fn to_value(&self, native: i32) -> Value {
        Value::Int(Some(native))
    }

    fn default_native(&self) -> i32 {
        0
    }

    fn bind_native(
        &self,
        stmt: &mut dyn StatementBinder,
        index: usize,
        native: i32,
    ) -> Result<(), BindError> {
        stmt.bind_int(index, native)
    }

    fn literal(&self, native: &i32) -> Result<String, ConversionError> {
        Ok(native.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binder::{BoundParameter, ParameterBuffer};
    use crate::column::Column;

    #[test]
    fn test_round_trip_extremes() {
        let column = IntegerColumn::new("quantity");
        for v in [i32::MIN, -1, 0, 1, i32::MAX] {
            assert_eq!(column.to_column_type(&column.to_value(v)), Ok(v));
        }
    }

    #[test]
    fn test_accepts_narrower_and_in_range_wider_integers() {
        let column = IntegerColumn::new("quantity");
        assert_eq!(column.to_column_type(&Value::TinyInt(Some(-8))), Ok(-8));
        assert_eq!(column.to_column_type(&Value::BigInt(Some(70_000))), Ok(70_000));
        assert!(matches!(
            column.to_column_type(&Value::BigInt(Some(i64::from(i32::MAX) + 1))),
            Err(ConversionError::OutOfRange { .. })
        ));
        assert!(matches!(
            column.to_column_type(&Value::Unsigned(Some(u32::MAX))),
            Err(ConversionError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_bool_is_not_an_integer() {
        let column = IntegerColumn::new("quantity");
        assert!(matches!(
            column.to_column_type(&Value::Bool(Some(true))),
            Err(ConversionError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_bind_and_literal() {
        let column = IntegerColumn::new("quantity");
        let mut stmt = ParameterBuffer::new(1);
        column.bind(&mut stmt, 1, &Value::Int(Some(-42))).unwrap();
        assert_eq!(stmt.get(1), Some(&BoundParameter::Int(-42)));
        assert_eq!(column.sql_value(Some(&Value::Int(Some(-42)))).unwrap(), "-42");
        assert_eq!(column.default_value(), Value::Int(Some(0)));
    }
}
