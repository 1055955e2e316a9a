//! Configuration.
//!
//! `TableConfig` describes one pre-split table and is usually loaded from JSON:
//!
//! ```json
//! {
//!   "table_name": "events",
//!   "split_count": 10,
//!   "table_options": { "REGION_REPLICATION": "1" }
//! }
//! ```
//!
//! `ClientConfig` holds process-level settings, with environment fallbacks.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::errors::{Error, Result};

/// Environment variable read for the log filter when none is configured.
pub const LOG_ENV_VAR: &str = "PRESPLIT_LOG";

/// Log filter used when neither config nor environment sets one.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// One table to create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    pub table_name: String,
    pub split_count: i64,
    /// Extra table metadata, copied verbatim into the schema.
    #[serde(default)]
    pub table_options: BTreeMap<String, String>,
}

impl TableConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&contents)
    }
}

/// Process-level settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// `tracing_subscriber::EnvFilter` directives, e.g. `"presplit=debug"`.
    #[serde(default)]
    pub log_filter: Option<String>,
}

impl ClientConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Log filter to use. Priority: config > `PRESPLIT_LOG` > `"info"`.
    pub fn resolved_log_filter(&self) -> String {
        resolve_log_filter(self.log_filter.as_deref())
    }
}

pub(crate) fn resolve_log_filter(explicit: Option<&str>) -> String {
    choose_log_filter(explicit, std::env::var(LOG_ENV_VAR).ok().as_deref())
}

/// Empty values count as unset.
fn choose_log_filter(explicit: Option<&str>, from_env: Option<&str>) -> String {
    explicit
        .filter(|v| !v.is_empty())
        .or(from_env.filter(|v| !v.is_empty()))
        .unwrap_or(DEFAULT_LOG_FILTER)
        .to_string()
}
