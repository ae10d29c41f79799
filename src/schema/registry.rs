//! Registry of table schemas by table name.

use super::TableSchema;
use crate::error::SchemaError;
use std::collections::BTreeMap;
use std::sync::Arc;

/// All registered table schemas.
///
/// Populated at startup, then shared read-only; lookups hand out `Arc`s so
/// callers can hold a schema without borrowing the registry.
#[derive(Debug, Default, Clone)]
pub struct SchemaRegistry {
    tables: BTreeMap<String, Arc<TableSchema>>,
}

impl SchemaRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, schema: TableSchema) -> Result<Arc<TableSchema>, SchemaError> {
        if self.tables.contains_key(schema.table()) {
            return Err(SchemaError::DuplicateTable(schema.table().to_string()));
        }
        log::debug!(
            "registered table {} with {} columns",
            schema.table(),
            schema.columns().len()
        );
        let schema = Arc::new(schema);
        self.tables
            .insert(schema.table().to_string(), Arc::clone(&schema));
        Ok(schema)
    }

    #[must_use]
    pub fn table(&self, name: &str) -> Option<Arc<TableSchema>> {
        self.tables.get(name).cloned()
    }

    /// Schemas ordered by table name
    pub fn tables(&self) -> impl Iterator<Item = &Arc<TableSchema>> {
        self.tables.values()
    }

    /// `CREATE TABLE` statements for every registered table
    #[must_use]
    pub fn create_tables_sql(&self) -> Vec<String> {
        self.tables().map(|schema| schema.create_table_sql()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
