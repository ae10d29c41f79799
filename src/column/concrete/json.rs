//! JSON document column.

use crate::binder::StatementBinder;
use crate::column::{column_struct, literal, mismatch, ColumnInternal, ColumnKind, ColumnMeta};
use crate::error::{BindError, ConversionError};
use sea_query::Value;

column_struct!(
    /// `serde_json::Value` column stored as serialized `TEXT`.
    ///
    /// `Value::String` input is treated as the stored JSON text and parsed, so
    /// rows read back from SQLite normalize to `Value::Json`.
    JsonColumn
);

impl JsonColumn {
    fn serialize(&self, native: &serde_json::Value) -> Result<String, ConversionError> {
        serde_json::to_string(native).map_err(|err| ConversionError::NotRepresentable {
            kind: ColumnKind::Json,
            reason: err.to_string(),
        })
    }
}

impl ColumnInternal for JsonColumn {
    type Native = serde_json::Value;

    const KIND: ColumnKind = ColumnKind::Json;
    const SQL_TYPE: &'static str = "TEXT";

    fn meta(&self) -> &ColumnMeta {
        &self.meta
    }

    fn to_column_type(&self, value: &Value) -> Result<serde_json::Value, ConversionError> {
        match value {
            Value::Json(Some(json)) => Ok((**json).clone()),
            Value::String(Some(text)) => {
                serde_json::from_str(text).map_err(|err| ConversionError::InvalidText {
                    expected: Self::KIND,
                    text: text.clone(),
                    reason: err.to_string(),
                })
            }
            _ => Err(mismatch(Self::KIND, value)),
        }
    }

    fn to_value(&self, native: serde_json::Value) -> Value {
        Value::Json(Some(Box::new(native)))
    }

    fn default_native(&self) -> serde_json::Value {
        serde_json::Value::Null
    }

    fn bind_native(
        &self,
        stmt: &mut dyn StatementBinder,
        index: usize,
        native: serde_json::Value,
    ) -> Result<(), BindError> {
        let text = self
            .serialize(&native)
            .map_err(|err| BindError::new(BindError::MISUSE, err.to_string()))?;
        stmt.bind_text(index, &text)
    }

    fn literal(&self, native: &serde_json::Value) -> Result<String, ConversionError> {
        let text = self.serialize(native)?;
        literal::text(&text).ok_or_else(|| ConversionError::NotRepresentable {
            kind: Self::KIND,
            reason: "document contains a NUL character".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binder::{BoundParameter, ParameterBuffer};
    use crate::column::Column;
    use serde_json::json;

    #[test]
    fn test_bind_serializes_document() {
        let column = JsonColumn::new("attributes");
        let value = Value::Json(Some(Box::new(json!({"color": "red", "sizes": [1, 2]}))));
        let mut stmt = ParameterBuffer::new(1);
        column.bind(&mut stmt, 1, &value).unwrap();
        let Some(BoundParameter::Text(text)) = stmt.get(1) else {
            panic!("expected text parameter");
        };
        assert_eq!(
            column.to_column_type(&Value::String(Some(text.clone()))),
            Ok(json!({"color": "red", "sizes": [1, 2]}))
        );
    }

    #[test]
    fn test_bind_and_literal_carry_the_same_text() {
        let column = JsonColumn::new("attributes");
        let value = Value::Json(Some(Box::new(json!({"tags": ["a", "b"], "n": 1.5}))));
        let mut stmt = ParameterBuffer::new(1);
        column.bind(&mut stmt, 1, &value).unwrap();
        let Some(BoundParameter::Text(text)) = stmt.get(1) else {
            panic!("expected text parameter");
        };
        assert!(!text.is_empty());
        assert_eq!(column.sql_value(Some(&value)).unwrap(), format!("'{text}'"));
    }

    #[test]
    fn test_literal_escapes_embedded_quotes() {
        let column = JsonColumn::new("attributes");
        let value = Value::Json(Some(Box::new(json!({"name": "O'Brien"}))));
        assert_eq!(
            column.sql_value(Some(&value)).unwrap(),
            r#"'{"name":"O''Brien"}'"#
        );
    }

    #[test]
    fn test_malformed_text() {
        let column = JsonColumn::new("attributes");
        assert!(matches!(
            column.to_column_type(&Value::String(Some("{oops".to_string()))),
            Err(ConversionError::InvalidText { .. })
        ));
        assert_eq!(column.sql_value(Some(&column.default_value())).unwrap(), "'null'");
    }
}
