//! Table schemas: the ordered column descriptors of one record type.
//!
//! A [`TableSchema`] is built once when a record type is registered and never
//! changes afterwards. It generates the SQL the record layer needs and binds or
//! renders whole records column by column through the [`Column`] trait.
//!
//! # Structure
//!
//! - `registry`: `SchemaRegistry`, the table name to schema map

mod registry;

pub use registry::SchemaRegistry;

use crate::binder::StatementBinder;
use crate::column::{
    BigIntegerColumn, BlobColumn, BooleanColumn, Column, DateColumn, DateTimeColumn,
    DecimalColumn, DoubleColumn, FloatColumn, IntegerColumn, JsonColumn, TextColumn, UuidColumn,
};
use crate::config::ColumnConfig;
use crate::error::{ColumnError, SchemaError};
use crate::record::Record;
use sea_query::Value;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Double-quote an identifier, doubling embedded quotes
fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Ordered column descriptors for one table
#[derive(Debug, Clone)]
pub struct TableSchema {
    table: String,
    columns: Vec<Arc<dyn Column>>,
}

impl TableSchema {
    pub fn builder(table: impl Into<String>) -> TableSchemaBuilder {
        TableSchemaBuilder {
            table: table.into(),
            config: ColumnConfig::default(),
            columns: Vec::new(),
        }
    }

    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    #[must_use]
    pub fn columns(&self) -> &[Arc<dyn Column>] {
        &self.columns
    }

    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Arc<dyn Column>> {
        self.columns.iter().find(|column| column.name() == name)
    }

    /// `CREATE TABLE IF NOT EXISTS` with each column's declared SQL type
    #[must_use]
    pub fn create_table_sql(&self) -> String {
        let definitions: Vec<String> = self
            .columns
            .iter()
            .map(|column| format!("{} {}", quote_identifier(column.name()), column.sql_type()))
            .collect();
        format!(
            "CREATE TABLE IF NOT EXISTS {} ({})",
            quote_identifier(&self.table),
            definitions.join(", ")
        )
    }

    /// Parameterized `INSERT` with `?1..?n` in column order, for [`bind_record`](Self::bind_record)
    #[must_use]
    pub fn insert_statement_sql(&self) -> String {
        let placeholders: Vec<String> = (1..=self.columns.len())
            .map(|index| format!("?{index}"))
            .collect();
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            quote_identifier(&self.table),
            self.column_list(),
            placeholders.join(", ")
        )
    }

    /// Multi-row `INSERT` with every value inlined as a literal.
    ///
    /// Returns `None` for an empty batch.
    pub fn insert_sql(&self, records: &[&dyn Record]) -> Result<Option<String>, ColumnError> {
        if records.is_empty() {
            return Ok(None);
        }
        let rows = records
            .iter()
            .map(|record| -> Result<String, ColumnError> {
                let literals = self
                    .columns
                    .iter()
                    .map(|column| column.sql_value_from_record(*record))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(format!("({})", literals.join(", ")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Some(format!(
            "INSERT INTO {} ({}) VALUES {}",
            quote_identifier(&self.table),
            self.column_list(),
            rows.join(", ")
        )))
    }

    /// Bind every column of `record` at parameter index position + 1.
    ///
    /// Absent attributes bind `NULL`. Stops at the first failure; slots bound
    /// before it stay bound.
    pub fn bind_record(
        &self,
        stmt: &mut dyn StatementBinder,
        record: &dyn Record,
    ) -> Result<(), ColumnError> {
        for (position, column) in self.columns.iter().enumerate() {
            let index = position + 1;
            match record.attribute(column.name()) {
                Some(value) => column.bind(stmt, index, value)?,
                None => stmt.bind_null(index).map_err(|source| ColumnError::Bind {
                    column: column.name().to_string(),
                    index,
                    source,
                })?,
            }
            log::trace!("bound {}.{} at ?{}", self.table, column.name(), index);
        }
        Ok(())
    }

    /// Every column's default value, for initializing a fresh record
    #[must_use]
    pub fn default_record(&self) -> HashMap<String, Value> {
        self.columns
            .iter()
            .map(|column| (column.name().to_string(), column.default_value()))
            .collect()
    }

    /// Coerce each present attribute into its column's canonical variant.
    ///
    /// Attributes without a matching column are left out.
    pub fn normalize_record(
        &self,
        record: &dyn Record,
    ) -> Result<HashMap<String, Value>, ColumnError> {
        let mut normalized = HashMap::new();
        for column in &self.columns {
            if let Some(value) = record.attribute(column.name()) {
                let value = column.normalize(value).map_err(|source| ColumnError::Conversion {
                    column: column.name().to_string(),
                    source,
                })?;
                normalized.insert(column.name().to_string(), value);
            }
        }
        Ok(normalized)
    }

    fn column_list(&self) -> String {
        self.columns
            .iter()
            .map(|column| quote_identifier(column.name()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Builder for [`TableSchema`].
///
/// The typed shorthands (`double`, `text`, ...) build columns with the
/// builder's [`ColumnConfig`]; [`column`](Self::column) takes any column,
/// including kinds defined outside this crate.
#[derive(Debug)]
pub struct TableSchemaBuilder {
    table: String,
    config: ColumnConfig,
    columns: Vec<Arc<dyn Column>>,
}

macro_rules! typed_columns {
    ($($method:ident => $column:ident),* $(,)?) => {
        $(
            #[must_use]
            pub fn $method(self, name: impl Into<String>) -> Self {
                let column = $column::with_config(name, self.config);
                self.column(column)
            }
        )*
    };
}

impl TableSchemaBuilder {
    /// Configuration applied by the typed shorthands added after this call
    #[must_use]
    pub fn config(mut self, config: ColumnConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn column(mut self, column: impl Column + 'static) -> Self {
        self.columns.push(Arc::new(column));
        self
    }

    typed_columns! {
        double => DoubleColumn,
        float => FloatColumn,
        integer => IntegerColumn,
        big_integer => BigIntegerColumn,
        boolean => BooleanColumn,
        text => TextColumn,
        date => DateColumn,
        date_time => DateTimeColumn,
        blob => BlobColumn,
        uuid => UuidColumn,
        decimal => DecimalColumn,
        json => JsonColumn,
    }

    pub fn build(self) -> Result<TableSchema, SchemaError> {
        if self.columns.is_empty() {
            return Err(SchemaError::EmptyTable(self.table));
        }
        {
            let mut seen = HashSet::new();
            if let Some(column) = self.columns.iter().find(|column| !seen.insert(column.name())) {
                return Err(SchemaError::DuplicateColumn {
                    table: self.table.clone(),
                    column: column.name().to_string(),
                });
            }
        }
        Ok(TableSchema {
            table: self.table,
            columns: self.columns,
        })
    }
}
