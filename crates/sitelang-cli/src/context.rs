//! Shared router context and CLI error handling.

use std::fmt::{self, Display, Formatter};
use std::path::Path;

use anyhow::anyhow;
use sitelang_config::{ConfigError, load_router};
use sitelang_core::LocaleRouter;

/// Errors surfaced to the user with a dedicated exit code.
#[derive(Debug)]
pub(crate) enum CliError {
    Validation(String),
    Failure(anyhow::Error),
}

/// Convenience alias for functions returning a `CliError`.
pub(crate) type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Failure(_) => 3,
        }
    }

    pub(crate) fn display_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Failure(error) => format!("{error:#}"),
        }
    }
}

impl Display for CliError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("cli error")
    }
}

impl std::error::Error for CliError {}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        match error {
            ConfigError::InvalidField {
                field,
                value,
                reason,
            } => Self::validation(format!(
                "invalid value {} for {field} ({reason})",
                value.as_deref().unwrap_or("<unset>")
            )),
            ConfigError::Router { source } => {
                Self::validation(format!("invalid router configuration: {source}"))
            }
            ConfigError::Io {
                operation,
                path,
                source,
            } => Self::failure(anyhow!("{operation} failed for {}: {source}", path.display())),
            ConfigError::Parse { source } => {
                Self::failure(anyhow!("languages document is not valid JSON: {source}"))
            }
        }
    }
}

/// Router built from the languages document and environment settings.
pub(crate) struct AppContext {
    pub(crate) router: LocaleRouter,
}

impl AppContext {
    pub(crate) fn load<F>(languages: &Path, lookup: F) -> CliResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let router = load_router(languages, lookup)?;
        Ok(Self { router })
    }
}
