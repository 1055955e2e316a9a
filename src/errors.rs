//! Error types for presplit.
//!
//! Two layers:
//! - `AdminError` is what an administrative backend reports. It is never
//!   remapped; callers see exactly what the backend returned.
//! - `Error` is the crate-level error. Local validation failures are
//!   `InvalidArgument` and are raised before any admin call is made.

use thiserror::Error;

/// Failure reported by the administrative service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdminError {
    #[error("Table '{table}' already exists")]
    TableExists { table: String },

    #[error("Table '{table}' not found")]
    TableNotFound { table: String },

    #[error("Table '{table}' must be disabled before it can be deleted")]
    TableNotDisabled { table: String },

    #[error("Table '{table}' is already disabled")]
    TableNotEnabled { table: String },

    #[error("Invalid split keys for table '{table}': {reason}")]
    InvalidSplitKeys {
        table: String,
        #[source]
        reason: SplitKeyError,
    },

    #[error("Connection to admin service failed: {message}")]
    Connection { message: String },

    #[error("Admin service error: {message}")]
    Service { message: String },
}

impl AdminError {
    /// The table this error refers to, if any.
    pub fn table(&self) -> Option<&str> {
        match self {
            AdminError::TableExists { table }
            | AdminError::TableNotFound { table }
            | AdminError::TableNotDisabled { table }
            | AdminError::TableNotEnabled { table }
            | AdminError::InvalidSplitKeys { table, .. } => Some(table),
            AdminError::Connection { .. } | AdminError::Service { .. } => None,
        }
    }
}

/// Why a set of split keys cannot serve as region boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitKeyError {
    #[error("split key at position {position} is empty")]
    EmptyKey { position: usize },

    #[error("split key at position {position} is not greater than the one at position {previous}")]
    NotIncreasing { previous: usize, position: usize },
}

/// Crate-level error.
#[derive(Debug, Error)]
pub enum Error {
    /// Rejected locally, before reaching the admin service.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Propagated unchanged from the admin service.
    #[error(transparent)]
    Admin(#[from] AdminError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to create tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

impl Error {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    /// The underlying admin error, when the failure came from the service.
    pub fn admin(&self) -> Option<&AdminError> {
        match self {
            Error::Admin(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
