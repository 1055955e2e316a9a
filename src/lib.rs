//! Pre-split table creation.
//!
//! Creates tables split into `split_count + 1` regions at deterministic,
//! fixed-width decimal keys (`000001`, `000002`, ...), with a single `cf`
//! column family and caller-supplied table metadata. The storage cluster is
//! reached through the `Admin` trait.

pub mod admin;
mod client;
pub mod columns;
pub mod config;
pub mod errors;
pub mod logging;
pub mod metrics;
pub mod schema;
pub mod splits;
pub mod table_operations;

pub use admin::{Admin, InMemoryAdmin};
pub use client::PresplitClient;
pub use columns::TableColumnNames;
pub use config::{ClientConfig, TableConfig};
pub use errors::{AdminError, Error, Result, SplitKeyError};
pub use logging::init_tracing;
pub use metrics::OperationMetrics;
pub use schema::{COLUMN_FAMILY, TableSchema, TableSchemaBuilder};
pub use splits::{MAX_SPLIT_COUNT, SPLIT_PREFIX_LENGTH, generate_split_keys};
pub use table_operations::{
    execute_create_table, execute_delete_table, sync_create_table, sync_delete_table,
};
