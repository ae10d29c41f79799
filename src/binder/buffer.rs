//! In-memory statement binder.

use super::StatementBinder;
use crate::error::BindError;

/// A value held in one parameter slot, by SQLite storage class
#[derive(Debug, Clone, PartialEq)]
pub enum BoundParameter {
    Null,
    Double(f64),
    Int(i32),
    Int64(i64),
    Text(String),
    Blob(Vec<u8>),
}

/// Fixed-size parameter slots that behave like a prepared statement's.
///
/// Out-of-range indexes fail with `SQLITE_RANGE` and binding after
/// [`finalize`](Self::finalize) fails with `SQLITE_MISUSE`, matching what
/// SQLite reports for the same mistakes.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterBuffer {
    slots: Vec<Option<BoundParameter>>,
    finalized: bool,
}

impl ParameterBuffer {
    #[must_use]
    pub fn new(parameter_count: usize) -> Self {
        ParameterBuffer {
            slots: vec![None; parameter_count],
            finalized: false,
        }
    }

    /// Parameter held by a 1-based slot, `None` if nothing was bound there
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&BoundParameter> {
        index
            .checked_sub(1)
            .and_then(|slot| self.slots.get(slot))
            .and_then(Option::as_ref)
    }

    /// Number of slots that have been bound
    #[must_use]
    pub fn bound_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Parameters in slot order. Unbound slots read as `Null`, as in SQLite.
    #[must_use]
    pub fn parameters(&self) -> Vec<BoundParameter> {
        self.slots
            .iter()
            .map(|slot| slot.clone().unwrap_or(BoundParameter::Null))
            .collect()
    }

    /// Reset every slot to unbound (`sqlite3_clear_bindings`)
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }

    /// Further binds fail once the buffer is finalized
    pub fn finalize(&mut self) {
        self.finalized = true;
    }

    fn store(&mut self, index: usize, parameter: BoundParameter) -> Result<(), BindError> {
        if self.finalized {
            return Err(BindError::new(
                BindError::MISUSE,
                "statement has been finalized",
            ));
        }
        let count = self.slots.len();
        let slot = index
            .checked_sub(1)
            .and_then(|slot| self.slots.get_mut(slot))
            .ok_or_else(|| BindError::out_of_range(index, count))?;
        *slot = Some(parameter);
        Ok(())
    }
}

impl StatementBinder for ParameterBuffer {
    fn parameter_count(&self) -> Option<usize> {
        Some(self.slots.len())
    }

    fn bind_null(&mut self, index: usize) -> Result<(), BindError> {
        self.store(index, BoundParameter::Null)
    }

    fn bind_double(&mut self, index: usize, value: f64) -> Result<(), BindError> {
        self.store(index, BoundParameter::Double(value))
    }

    fn bind_int(&mut self, index: usize, value: i32) -> Result<(), BindError> {
        self.store(index, BoundParameter::Int(value))
    }

    fn bind_int64(&mut self, index: usize, value: i64) -> Result<(), BindError> {
        self.store(index, BoundParameter::Int64(value))
    }

    fn bind_text(&mut self, index: usize, value: &str) -> Result<(), BindError> {
        self.store(index, BoundParameter::Text(value.to_string()))
    }

    fn bind_blob(&mut self, index: usize, value: &[u8]) -> Result<(), BindError> {
        self.store(index, BoundParameter::Blob(value.to_vec()))
    }
}
