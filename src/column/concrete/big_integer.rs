//! 64-bit integer column.

use crate::binder::StatementBinder;
use crate::column::{column_struct, numeric, ColumnInternal, ColumnKind, ColumnMeta};
use crate::error::{BindError, ConversionError};
use sea_query::Value;

column_struct!(
    /// `i64` column stored as SQLite `BIGINT` (INTEGER affinity)
    BigIntegerColumn
);

impl ColumnInternal for BigIntegerColumn {
    type Native = i64;

    const KIND: ColumnKind = ColumnKind::BigInteger;
    const SQL_TYPE: &'static str = "BIGINT";

    fn meta(&self) -> &ColumnMeta {
        &self.meta
    }

    fn to_column_type(&self, value: &Value) -> Result<i64, ConversionError> {
        numeric::to_integer(Self::KIND, value, &self.meta.config)
    }

    fn to_value(&self, native: i64) -> Value {
        Value::BigInt(Some(native))
    }

    fn default_native(&self) -> i64 {
        0
    }

    fn bind_native(
        &self,
        stmt: &mut dyn StatementBinder,
        index: usize,
        native: i64,
    ) -> Result<(), BindError> {
        stmt.bind_int64(index, native)
    }

    fn literal(&self, native: &i64) -> Result<String, ConversionError> {
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
        let column = BigIntegerColumn::new("id");
        for v in [i64::MIN, -1, 0, 1, i64::MAX] {
            assert_eq!(column.to_column_type(&column.to_value(v)), Ok(v));
            assert_eq!(column.sql_value(Some(&column.to_value(v))).unwrap(), v.to_string());
        }
    }

    #[test]
    fn test_unsigned_above_i64_is_out_of_range() {
        let column = BigIntegerColumn::new("id");
        assert!(matches!(
            column.to_column_type(&Value::BigUnsigned(Some(u64::MAX))),
            Err(ConversionError::OutOfRange { .. })
        ));
        assert_eq!(
            column.to_column_type(&Value::BigUnsigned(Some(i64::MAX as u64))),
            Ok(i64::MAX)
        );
    }

    #[test]
    fn test_binds_int64() {
        let column = BigIntegerColumn::new("id");
        let mut stmt = ParameterBuffer::new(1);
        column.bind(&mut stmt, 1, &Value::Int(Some(5))).unwrap();
        assert_eq!(stmt.get(1), Some(&BoundParameter::Int64(5)));
    }
}
