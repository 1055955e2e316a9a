//! Delete table operation.

use std::sync::Arc;
use std::time::Instant;
use tokio::runtime::Runtime;
use tracing::{info, warn};

use crate::admin::Admin;
use crate::errors::Result;
use crate::metrics::OperationMetrics;

/// Core async delete_table operation: disable, then delete.
///
/// If disabling fails, delete is not attempted. If delete fails after a
/// successful disable, the table stays disabled; nothing is rolled back.
pub async fn execute_delete_table<A: Admin>(
    admin: &A,
    table_name: &str,
) -> Result<OperationMetrics> {
    let start = Instant::now();

    admin.disable_table(table_name).await?;
    if let Err(e) = admin.delete_table(table_name).await {
        warn!(
            table = table_name,
            error = %e,
            "Delete failed after disable, table left disabled"
        );
        return Err(e.into());
    }

    let duration_ms = start.elapsed().as_secs_f64() * 1000.0;
    info!(table = table_name, duration_ms, "Deleted table");
    Ok(OperationMetrics::new(duration_ms))
}

/// Sync delete_table - blocks until complete.
///
/// Must not be called from inside an async context.
pub fn sync_delete_table<A: Admin>(
    admin: &A,
    runtime: &Arc<Runtime>,
    table_name: &str,
) -> Result<OperationMetrics> {
    runtime.block_on(execute_delete_table(admin, table_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::{AdminCall, AdminOperation, InMemoryAdmin};
    use crate::errors::AdminError;
    use crate::table_operations::execute_create_table;

    async fn admin_with_table(name: &str) -> InMemoryAdmin {
        let admin = InMemoryAdmin::new();
        execute_create_table(&admin, name, 2, [("k", "v")])
            .await
            .unwrap();
        admin
    }

    #[tokio::test]
    async fn test_disable_then_delete() {
        let admin = admin_with_table("events").await;
        execute_delete_table(&admin, "events").await.unwrap();

        let calls = admin.calls().await;
        assert_eq!(
            calls[1..],
            [
                AdminCall::DisableTable {
                    table: "events".to_string()
                },
                AdminCall::DeleteTable {
                    table: "events".to_string()
                },
            ]
        );
        assert!(!admin.table_exists("events").await);
    }

    #[tokio::test]
    async fn test_disable_failure_skips_delete() {
        let admin = InMemoryAdmin::new();
        let err = execute_delete_table(&admin, "missing").await.unwrap_err();

        assert_eq!(
            err.admin(),
            Some(&AdminError::TableNotFound {
                table: "missing".to_string()
            })
        );
        assert_eq!(
            admin.calls().await,
            vec![AdminCall::DisableTable {
                table: "missing".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn test_delete_failure_leaves_table_disabled() {
        let admin = admin_with_table("events").await;
        let injected = AdminError::Connection {
            message: "connection reset".to_string(),
        };
        admin
            .inject_failure(AdminOperation::DeleteTable, injected.clone())
            .await;

        let err = execute_delete_table(&admin, "events").await.unwrap_err();
        assert_eq!(err.admin(), Some(&injected));

        let state = admin.table("events").await.unwrap();
        assert!(!state.enabled);
    }
}
