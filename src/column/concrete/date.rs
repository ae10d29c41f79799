//! Calendar date column.

use crate::binder::StatementBinder;
use crate::column::{column_struct, literal, mismatch, ColumnInternal, ColumnKind, ColumnMeta};
use crate::error::{BindError, ConversionError};
use chrono::NaiveDate;
use sea_query::Value;

/// ISO-8601 date, the form SQLite's date functions read
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

column_struct!(
    /// `NaiveDate` column stored as `YYYY-MM-DD` text
    DateColumn
);

impl ColumnInternal for DateColumn {
    type Native = NaiveDate;

    const KIND: ColumnKind = ColumnKind::Date;
    const SQL_TYPE: &'static str = "DATE";

    fn meta(&self) -> &ColumnMeta {
        &self.meta
    }

    fn to_column_type(&self, value: &Value) -> Result<NaiveDate, ConversionError> {
        match value {
            Value::ChronoDate(Some(date)) => Ok(*date),
            Value::String(Some(text)) => NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
                .map_err(|err| ConversionError::InvalidText {
                    expected: Self::KIND,
                    text: text.clone(),
                    reason: err.to_string(),
                }),
            _ => Err(mismatch(Self::KIND, value)),
        }
    }

    fn to_value(&self, native: NaiveDate) -> Value {
        Value::ChronoDate(Some(native))
    }

    fn default_native(&self) -> NaiveDate {
        NaiveDate::default()
    }

    fn bind_native(
        &self,
        stmt: &mut dyn StatementBinder,
        index: usize,
        native: NaiveDate,
    ) -> Result<(), BindError> {
        stmt.bind_text(index, &native.format(DATE_FORMAT).to_string())
    }

    fn literal(&self, native: &NaiveDate) -> Result<String, ConversionError> {
        Ok(format!("'{}'", native.format(DATE_FORMAT)))
    }
}
