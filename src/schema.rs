//! Table schema and its builder.
//!
//! A `TableSchema` is assembled once through `TableSchemaBuilder` and never
//! mutated afterwards.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::errors::{Error, Result};

/// Name of the single column family every pre-split table gets.
pub const COLUMN_FAMILY: &str = "cf";

/// Immutable description of a table to create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSchema {
    name: String,
    column_families: BTreeSet<String>,
    metadata: BTreeMap<String, String>,
}

impl TableSchema {
    pub fn builder(name: impl Into<String>) -> TableSchemaBuilder {
        TableSchemaBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn column_families(&self) -> &BTreeSet<String> {
        &self.column_families
    }

    pub fn metadata(&self) -> &BTreeMap<String, String> {
        &self.metadata
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    pub fn has_column_family(&self, family: &str) -> bool {
        self.column_families.contains(family)
    }
}

/// Staged builder for `TableSchema`.
#[derive(Debug, Clone)]
pub struct TableSchemaBuilder {
    name: String,
    column_families: BTreeSet<String>,
    metadata: BTreeMap<String, String>,
}

impl TableSchemaBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column_families: BTreeSet::new(),
            metadata: BTreeMap::new(),
        }
    }

    /// Set one metadata entry. A later value for the same key replaces the earlier one.
    pub fn value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Apply every entry of `options`, in iteration order.
    pub fn values<I, K, V>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (k, v) in options {
            self.metadata.insert(k.into(), v.into());
        }
        self
    }

    pub fn column_family(mut self, family: impl Into<String>) -> Self {
        self.column_families.insert(family.into());
        self
    }

    /// Finish the schema.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the table name is empty or no column family was added.
    pub fn build(self) -> Result<TableSchema> {
        if self.name.is_empty() {
            return Err(Error::invalid_argument("Table name must not be empty"));
        }
        if self.column_families.iter().any(|f| f.is_empty()) {
            return Err(Error::invalid_argument("Column family name must not be empty"));
        }
        if self.column_families.is_empty() {
            return Err(Error::invalid_argument(format!(
                "Table '{}' needs at least one column family",
                self.name
            )));
        }
        Ok(TableSchema {
            name: self.name,
            column_families: self.column_families,
            metadata: self.metadata,
        })
    }
}

/// Schema used for pre-split tables: `options` as metadata plus `COLUMN_FAMILY`.
pub fn presplit_schema<I, K, V>(table_name: &str, options: I) -> Result<TableSchema>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    TableSchema::builder(table_name)
        .values(options)
        .column_family(COLUMN_FAMILY)
        .build()
}
