//! Presplit client.
//!
//! Bundles an admin backend with a tokio runtime so callers without their own
//! async context can create and delete pre-split tables synchronously.

use once_cell::sync::OnceCell;
use std::sync::Arc;
use tokio::runtime::Runtime;

use crate::admin::Admin;
use crate::config::TableConfig;
use crate::errors::{Error, Result};
use crate::metrics::OperationMetrics;
use crate::table_operations::{
    execute_create_table, execute_delete_table, sync_create_table, sync_delete_table,
};

/// Global shared Tokio runtime, created on first use.
static RUNTIME: OnceCell<Arc<Runtime>> = OnceCell::new();

fn shared_runtime() -> Result<Arc<Runtime>> {
    RUNTIME
        .get_or_try_init(|| Runtime::new().map(Arc::new))
        .cloned()
        .map_err(Error::Runtime)
}

/// Client for pre-split table management.
///
/// # Examples
///
/// ```no_run
/// use presplit::{InMemoryAdmin, PresplitClient};
///
/// let client = PresplitClient::new(InMemoryAdmin::new())?;
/// client.create_table("events", 10, [("REGION_REPLICATION", "1")])?;
/// client.delete_table("events")?;
/// # Ok::<(), presplit::Error>(())
/// ```
pub struct PresplitClient<A: Admin> {
    /// The administrative backend.
    admin: A,
    /// Tokio runtime for the sync methods.
    runtime: Arc<Runtime>,
}

impl<A: Admin> PresplitClient<A> {
    /// Create a client on the process-wide shared runtime.
    ///
    /// # Errors
    ///
    /// `Runtime` if the shared runtime could not be started.
    pub fn new(admin: A) -> Result<Self> {
        Ok(Self {
            admin,
            runtime: shared_runtime()?,
        })
    }

    /// Create a client on a caller-provided runtime.
    pub fn with_runtime(admin: A, runtime: Arc<Runtime>) -> Self {
        Self { admin, runtime }
    }

    pub fn admin(&self) -> &A {
        &self.admin
    }

    // ========== SYNC METHODS ==========

    /// Create `table_name` pre-split into `split_count + 1` regions.
    pub fn create_table<I, K, V>(
        &self,
        table_name: &str,
        split_count: i64,
        table_options: I,
    ) -> Result<OperationMetrics>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        sync_create_table(
            &self.admin,
            &self.runtime,
            table_name,
            split_count,
            table_options,
        )
    }

    /// Create the table described by `config`.
    pub fn create_table_from_config(&self, config: &TableConfig) -> Result<OperationMetrics> {
        self.create_table(
            &config.table_name,
            config.split_count,
            config.table_options.clone(),
        )
    }

    /// Disable, then delete `table_name`.
    pub fn delete_table(&self, table_name: &str) -> Result<OperationMetrics> {
        sync_delete_table(&self.admin, &self.runtime, table_name)
    }

    // ========== ASYNC METHODS ==========

    pub async fn async_create_table<I, K, V>(
        &self,
        table_name: &str,
        split_count: i64,
        table_options: I,
    ) -> Result<OperationMetrics>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        execute_create_table(&self.admin, table_name, split_count, table_options).await
    }

    pub async fn async_delete_table(&self, table_name: &str) -> Result<OperationMetrics> {
        execute_delete_table(&self.admin, table_name).await
    }
}
