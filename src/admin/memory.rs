//! In-memory admin backend.
//!
//! Behaves like a small cluster catalog: tables must be disabled before they
//! can be deleted, names are unique, split keys must be strictly increasing.
//! Every call is recorded, including rejected ones, and one-shot failures can
//! be queued per operation.

use std::collections::{HashMap, VecDeque};

use tokio::sync::Mutex;
use tracing::debug;

use super::Admin;
use crate::errors::AdminError;
use crate::schema::TableSchema;
use crate::splits::{RegionBounds, region_bounds, validate_split_keys};

/// One call received by `InMemoryAdmin`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminCall {
    CreateTable { table: String, split_keys: usize },
    DisableTable { table: String },
    DeleteTable { table: String },
}

impl AdminCall {
    fn operation(&self) -> AdminOperation {
        match self {
            AdminCall::CreateTable { .. } => AdminOperation::CreateTable,
            AdminCall::DisableTable { .. } => AdminOperation::DisableTable,
            AdminCall::DeleteTable { .. } => AdminOperation::DeleteTable,
        }
    }
}

/// Operation kind, used to queue injected failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminOperation {
    CreateTable,
    DisableTable,
    DeleteTable,
}

/// Stored state of one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    pub schema: TableSchema,
    pub split_keys: Vec<Vec<u8>>,
    pub regions: Vec<RegionBounds>,
    pub enabled: bool,
}

#[derive(Debug, Default)]
struct Inner {
    tables: HashMap<String, TableState>,
    calls: Vec<AdminCall>,
    failures: HashMap<AdminOperation, VecDeque<AdminError>>,
}

impl Inner {
    /// Record `call` and pop a queued failure for it, if any.
    fn record(&mut self, call: AdminCall) -> Result<(), AdminError> {
        let op = call.operation();
        self.calls.push(call);
        match self.failures.get_mut(&op).and_then(VecDeque::pop_front) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Admin backend that keeps everything in process memory.
#[derive(Debug, Default)]
pub struct InMemoryAdmin {
    inner: Mutex<Inner>,
}

impl InMemoryAdmin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `op` call fail with `err` instead of running.
    pub async fn inject_failure(&self, op: AdminOperation, err: AdminError) {
        let mut inner = self.inner.lock().await;
        inner.failures.entry(op).or_default().push_back(err);
    }

    /// Calls received so far, oldest first.
    pub async fn calls(&self) -> Vec<AdminCall> {
        self.inner.lock().await.calls.clone()
    }

    pub async fn table(&self, table: &str) -> Option<TableState> {
        self.inner.lock().await.tables.get(table).cloned()
    }

    pub async fn table_exists(&self, table: &str) -> bool {
        self.inner.lock().await.tables.contains_key(table)
    }

    pub async fn table_names(&self) -> Vec<String> {
        let inner = self.inner.lock().await;
        let mut names: Vec<String> = inner.tables.keys().cloned().collect();
        names.sort();
        names
    }
}

impl Admin for InMemoryAdmin {
    async fn create_table(
        &self,
        schema: &TableSchema,
        split_keys: &[Vec<u8>],
    ) -> Result<(), AdminError> {
        let mut inner = self.inner.lock().await;
        inner.record(AdminCall::CreateTable {
            table: schema.name().to_string(),
            split_keys: split_keys.len(),
        })?;

        if inner.tables.contains_key(schema.name()) {
            return Err(AdminError::TableExists {
                table: schema.name().to_string(),
            });
        }
        validate_split_keys(split_keys).map_err(|reason| AdminError::InvalidSplitKeys {
            table: schema.name().to_string(),
            reason,
        })?;

        let state = TableState {
            schema: schema.clone(),
            split_keys: split_keys.to_vec(),
            regions: region_bounds(split_keys),
            enabled: true,
        };
        debug!(
            table = schema.name(),
            regions = state.regions.len(),
            "Created table in memory"
        );
        inner.tables.insert(schema.name().to_string(), state);
        Ok(())
    }

    async fn disable_table(&self, table: &str) -> Result<(), AdminError> {
        let mut inner = self.inner.lock().await;
        inner.record(AdminCall::DisableTable {
            table: table.to_string(),
        })?;

        let state = inner
            .tables
            .get_mut(table)
            .ok_or_else(|| AdminError::TableNotFound {
                table: table.to_string(),
            })?;
        if !state.enabled {
            return Err(AdminError::TableNotEnabled {
                table: table.to_string(),
            });
        }
        state.enabled = false;
        Ok(())
    }

    async fn delete_table(&self, table: &str) -> Result<(), AdminError> {
        let mut inner = self.inner.lock().await;
        inner.record(AdminCall::DeleteTable {
            table: table.to_string(),
        })?;

        let enabled = match inner.tables.get(table) {
            Some(state) => state.enabled,
            None => {
                return Err(AdminError::TableNotFound {
                    table: table.to_string(),
                });
            }
        };
        if enabled {
            return Err(AdminError::TableNotDisabled {
                table: table.to_string(),
            });
        }
        inner.tables.remove(table);
        Ok(())
    }
}
