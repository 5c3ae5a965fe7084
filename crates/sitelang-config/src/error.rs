//! Error types for configuration loading.

use std::io;
use std::path::PathBuf;

use sitelang_core::RouterError;
use thiserror::Error;

/// Primary error type for configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Field contained an invalid value.
    #[error("invalid configuration field '{field}'")]
    InvalidField {
        /// Setting or document field that failed validation.
        field: String,
        /// Offending value when available.
        value: Option<String>,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
    /// The languages document was not valid JSON.
    #[error("languages document is not valid JSON")]
    Parse {
        /// Source JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// File system operation failed.
    #[error("filesystem operation failed: {operation}")]
    Io {
        /// Operation identifier.
        operation: &'static str,
        /// Path involved in the operation.
        path: PathBuf,
        /// Source IO error.
        #[source]
        source: io::Error,
    },
    /// The assembled router configuration broke a router invariant.
    #[error("router configuration rejected")]
    Router {
        /// Source router error.
        #[from]
        source: RouterError,
    },
}

/// Convenience alias for configuration results.
pub type ConfigResult<T> = Result<T, ConfigError>;

impl ConfigError {
    pub(crate) fn invalid_field(
        field: impl Into<String>,
        value: Option<&str>,
        reason: &'static str,
    ) -> Self {
        Self::InvalidField {
            field: field.into(),
            value: value.map(str::to_string),
            reason,
        }
    }
}
