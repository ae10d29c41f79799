//! Timestamp column without time zone.

use crate::binder::StatementBinder;
use crate::column::{column_struct, mismatch, ColumnInternal, ColumnKind, ColumnMeta};
use crate::error::{BindError, ConversionError};
use chrono::NaiveDateTime;
use sea_query::Value;

/// Storage form; `%.f` prints only the fraction digits the value has
const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";
/// Also accepted when reading text back
const ISO_T_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

column_struct!(
    /// `NaiveDateTime` column stored as `YYYY-MM-DD HH:MM:SS[.fff]` text.
    ///
    /// UTC timestamps are accepted and stored as their UTC wall-clock time.
    DateTimeColumn
);

fn parse(text: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    let text = text.trim();
    NaiveDateTime::parse_from_str(text, DATE_TIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(text, ISO_T_FORMAT))
}

impl ColumnInternal for DateTimeColumn {
    type Native = NaiveDateTime;

    const KIND: ColumnKind = ColumnKind::DateTime;
    const SQL_TYPE: &'static str = "DATETIME";

    fn meta(&self) -> &ColumnMeta {
        &self.meta
    }

    fn to_column_type(&self, value: &Value) -> Result<NaiveDateTime, ConversionError> {
        match value {
            Value::ChronoDateTime(Some(timestamp)) => Ok(*timestamp),
            Value::ChronoDateTimeUtc(Some(timestamp)) => Ok(timestamp.naive_utc()),
            Value::String(Some(text)) => parse(text).map_err(|err| ConversionError::InvalidText {
                expected: Self::KIND,
                text: text.clone(),
                reason: err.to_string(),
            }),
            _ => Err(mismatch(Self::KIND, value)),
        }
    }

    fn to_value(&self, native: NaiveDateTime) -> Value {
        Value::ChronoDateTime(Some(native))
    }

    fn default_native(&self) -> NaiveDateTime {
        NaiveDateTime::default()
    }

    fn bind_native(
        &self,
        stmt: &mut dyn StatementBinder,
        index: usize,
        native: NaiveDateTime,
    ) -> Result<(), BindError> {
        stmt.bind_text(index, &native.format(DATE_TIME_FORMAT).to_string())
    }

    fn literal(&self, native: &NaiveDateTime) -> Result<String, ConversionError> {
        Ok(format!("'{}'", native.format(DATE_TIME_FORMAT)))
    }
}
