//! Administrative service boundary.
//!
//! This crate never talks to a storage cluster directly. Anything that can
//! create, disable and delete tables implements `Admin`:
//! - `memory` - in-process backend that keeps tables and their regions in memory

mod memory;

pub use memory::{AdminCall, AdminOperation, InMemoryAdmin, TableState};

use std::future::Future;
use std::sync::Arc;

use crate::errors::AdminError;
use crate::schema::TableSchema;

/// Table lifecycle operations of an administrative service.
///
/// Implementations are shared across threads and report failures as
/// `AdminError`; callers propagate them unchanged.
pub trait Admin: Send + Sync {
    /// Create `schema` pre-split at `split_keys` (`split_keys.len() + 1` regions).
    fn create_table(
        &self,
        schema: &TableSchema,
        split_keys: &[Vec<u8>],
    ) -> impl Future<Output = Result<(), AdminError>> + Send;

    fn disable_table(&self, table: &str) -> impl Future<Output = Result<(), AdminError>> + Send;

    fn delete_table(&self, table: &str) -> impl Future<Output = Result<(), AdminError>> + Send;
}

impl<A: Admin> Admin for Arc<A> {
    fn create_table(
        &self,
        schema: &TableSchema,
        split_keys: &[Vec<u8>],
    ) -> impl Future<Output = Result<(), AdminError>> + Send {
        (**self).create_table(schema, split_keys)
    }

    fn disable_table(&self, table: &str) -> impl Future<Output = Result<(), AdminError>> + Send {
        (**self).disable_table(table)
    }

    fn delete_table(&self, table: &str) -> impl Future<Output = Result<(), AdminError>> + Send {
        (**self).delete_table(table)
    }
}
