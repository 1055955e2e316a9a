//! Logging setup, powered by tracing-subscriber.

use tracing_subscriber::EnvFilter;

use crate::config::resolve_log_filter;
use crate::errors::{Error, Result};

/// Install a global fmt subscriber.
///
/// Filter priority: `filter` > `PRESPLIT_LOG` env var > `"info"`.
/// If a global subscriber is already set this is a no-op.
///
/// # Errors
///
/// `Config` if the filter directives don't parse.
pub fn init_tracing(filter: Option<&str>) -> Result<()> {
    let directives = resolve_log_filter(filter);
    let env_filter = EnvFilter::try_new(&directives)
        .map_err(|e| Error::Config(format!("Invalid log filter '{}': {}", directives, e)))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init();
    Ok(())
}
