//! Create table operation.

use std::sync::Arc;
use std::time::Instant;
use tokio::runtime::Runtime;
use tracing::{debug, info};

use crate::admin::Admin;
use crate::errors::Result;
use crate::metrics::OperationMetrics;
use crate::schema::presplit_schema;
use crate::splits::{generate_split_keys, validate_split_count};

/// Core async create_table operation.
///
/// Builds the schema (`table_options` as metadata plus the `cf` family),
/// generates `split_count` split keys and hands both to `admin`.
///
/// # Errors
///
/// - `InvalidArgument` if `split_count` is not in `1..MAX_SPLIT_COUNT` or
///   `table_name` is empty. `admin` is not called.
/// - `Admin` with whatever the admin service returned.
pub async fn execute_create_table<A, I, K, V>(
    admin: &A,
    table_name: &str,
    split_count: i64,
    table_options: I,
) -> Result<OperationMetrics>
where
    A: Admin,
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    validate_split_count(split_count)?;
    let schema = presplit_schema(table_name, table_options)?;
    let split_keys = generate_split_keys(split_count)?;

    debug!(
        table = table_name,
        split_count,
        first_key = ?split_keys.first().map(|k| String::from_utf8_lossy(k).into_owned()),
        last_key = ?split_keys.last().map(|k| String::from_utf8_lossy(k).into_owned()),
        "Generated split keys"
    );

    let start = Instant::now();
    admin.create_table(&schema, &split_keys).await?;
    let duration_ms = start.elapsed().as_secs_f64() * 1000.0;

    let regions = split_keys.len() + 1;
    info!(
        table = table_name,
        regions,
        duration_ms,
        "Created pre-split table"
    );
    Ok(OperationMetrics::with_regions(duration_ms, regions))
}

/// Sync create_table - blocks until complete.
///
/// Must not be called from inside an async context.
pub fn sync_create_table<A, I, K, V>(
    admin: &A,
    runtime: &Arc<Runtime>,
    table_name: &str,
    split_count: i64,
    table_options: I,
) -> Result<OperationMetrics>
where
    A: Admin,
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    runtime.block_on(execute_create_table(
        admin,
        table_name,
        split_count,
        table_options,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::{AdminCall, InMemoryAdmin};
    use crate::schema::COLUMN_FAMILY;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_create_three_splits() {
        let admin = InMemoryAdmin::new();
        let metrics = execute_create_table(&admin, "events", 3, HashMap::<String, String>::new())
            .await
            .unwrap();

        assert_eq!(metrics.regions, Some(4));
        let state = admin.table("events").await.unwrap();
        assert_eq!(
            state.split_keys,
            vec![b"000001".to_vec(), b"000002".to_vec(), b"000003".to_vec()]
        );
        assert!(state.schema.has_column_family(COLUMN_FAMILY));
    }

    #[tokio::test]
    async fn test_invalid_split_count_never_reaches_admin() {
        let admin = InMemoryAdmin::new();
        for split_count in [0, -5, 1_000_000, 2_000_000] {
            let err = execute_create_table(&admin, "events", split_count, [("k", "v")])
                .await
                .unwrap_err();
            assert!(err.is_invalid_argument());
        }
        assert!(admin.calls().await.is_empty());
    }

    #[tokio::test]
    async fn test_empty_table_name_never_reaches_admin() {
        let admin = InMemoryAdmin::new();
        let err = execute_create_table(&admin, "", 2, [("k", "v")])
            .await
            .unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(admin.calls().await.is_empty());
    }

    #[tokio::test]
    async fn test_admin_sees_split_key_count() {
        let admin = InMemoryAdmin::new();
        execute_create_table(&admin, "events", 10, [("k", "v")])
            .await
            .unwrap();
        assert_eq!(
            admin.calls().await,
            vec![AdminCall::CreateTable {
                table: "events".to_string(),
                split_keys: 10
            }]
        );
    }
}
