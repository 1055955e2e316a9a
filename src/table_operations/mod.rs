//! Table management operations.
//!
//! This module provides table lifecycle operations:
//! - `create` - Create a table pre-split into `split_count + 1` regions
//! - `delete` - Disable, then delete a table
//!
//! Each operation comes as a core async function (`execute_*`) and a blocking
//! wrapper (`sync_*`) that drives it on a tokio runtime.

mod create;
mod delete;

pub use create::{execute_create_table, sync_create_table};
pub use delete::{execute_delete_table, sync_delete_table};
