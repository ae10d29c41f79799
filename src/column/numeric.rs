//! Lossless numeric conversions shared by the numeric columns.
//!
//! Every path either produces the exact value or an error naming what would
//! have been lost; nothing is truncated or rounded.

use super::{mismatch, ColumnKind};
use crate::config::ColumnConfig;
use crate::error::ConversionError;
use crate::value::as_integer;
use sea_query::Value;
use std::fmt::Display;
use std::str::FromStr;

/// Largest integer magnitude every smaller integer of which is exact in `f64`
const F64_EXACT_INTEGER: i128 = 1 << 53;
/// Same bound for `f32`
const F32_EXACT_INTEGER: i128 = 1 << 24;
/// 2^127, the first magnitude outside `i128`
const I128_LIMIT: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

pub(crate) fn to_f64(
    kind: ColumnKind,
    value: &Value,
    config: &ColumnConfig,
) -> Result<f64, ConversionError> {
    match value {
        Value::Double(Some(v)) => Ok(*v),
        Value::Float(Some(v)) => Ok(f64::from(*v)),
        Value::String(Some(text)) if config.numeric_text => parse_text(kind, text),
        _ => match as_integer(value) {
            Some(i) if i.abs() <= F64_EXACT_INTEGER => Ok(i as f64),
            Some(i) => Err(ConversionError::LossOfPrecision {
                expected: kind,
                value: i.to_string(),
            }),
            None => Err(mismatch(kind, value)),
        },
    }
}

pub(crate) fn to_f32(
    kind: ColumnKind,
    value: &Value,
    config: &ColumnConfig,
) -> Result<f32, ConversionError> {
    match value {
        Value::Float(Some(v)) => Ok(*v),
        Value::Double(Some(v)) => narrow(kind, *v),
        Value::String(Some(text)) if config.numeric_text => parse_text(kind, text),
        _ => match as_integer(value) {
            Some(i) if i.abs() <= F32_EXACT_INTEGER => Ok(i as f32),
            Some(i) => Err(ConversionError::LossOfPrecision {
                expected: kind,
                value: i.to_string(),
            }),
            None => Err(mismatch(kind, value)),
        },
    }
}

/// Integer conversion into any type reachable from `i128` by `TryFrom`
pub(crate) fn to_integer<T: TryFrom<i128>>(
    kind: ColumnKind,
    value: &Value,
    config: &ColumnConfig,
) -> Result<T, ConversionError> {
    let wide = match value {
        Value::Double(Some(v)) => integral(kind, *v)?,
        Value::Float(Some(v)) => integral(kind, f64::from(*v))?,
        Value::String(Some(text)) if config.numeric_text => parse_text::<i128>(kind, text)?,
        _ => as_integer(value).ok_or_else(|| mismatch(kind, value))?,
    };
    T::try_from(wide).map_err(|_| ConversionError::OutOfRange {
        expected: kind,
        value: wide.to_string(),
    })
}

fn narrow(kind: ColumnKind, value: f64) -> Result<f32, ConversionError> {
    let narrowed = value as f32;
    if value.is_nan() || f64::from(narrowed) == value {
        return Ok(narrowed);
    }
    if narrowed.is_infinite() {
        return Err(ConversionError::OutOfRange {
            expected: kind,
            value: value.to_string(),
        });
    }
    Err(ConversionError::LossOfPrecision {
        expected: kind,
        value: value.to_string(),
    })
}

fn integral(kind: ColumnKind, value: f64) -> Result<i128, ConversionError> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(ConversionError::LossOfPrecision {
            expected: kind,
            value: value.to_string(),
        });
    }
    if value.abs() >= I128_LIMIT {
        return Err(ConversionError::OutOfRange {
            expected: kind,
            value: value.to_string(),
        });
    }
    Ok(value as i128)
}

fn parse_text<T>(kind: ColumnKind, text: &str) -> Result<T, ConversionError>
where
    T: FromStr,
    T::Err: Display,
{
    text.trim()
        .parse::<T>()
        .map_err(|err| ConversionError::InvalidText {
            expected: kind,
            text: text.to_string(),
            reason: err.to_string(),
        })
}
