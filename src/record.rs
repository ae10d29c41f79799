//! The record-side interface columns read from.
//!
//! Records are owned by the record layer; columns only borrow them for the
//! duration of a single call.

use sea_query::Value;
use std::collections::{BTreeMap, HashMap};

/// Attribute lookup by column name.
///
/// `None` means the attribute is absent. A present attribute may still be a
/// null `Value`; columns treat both cases as SQL `NULL`.
pub trait Record {
    fn attribute(&self, column: &str) -> Option<&Value>;
}

impl Record for HashMap<String, Value> {
    fn attribute(&self, column: &str) -> Option<&Value> {
        self.get(column)
    }
}

impl Record for BTreeMap<String, Value> {
    fn attribute(&self, column: &str) -> Option<&Value> {
        self.get(column)
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn attribute(&self, column: &str) -> Option<&Value> {
        (**self).attribute(column)
    }
}
