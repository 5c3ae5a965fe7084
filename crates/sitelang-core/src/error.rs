//! Error types for router construction and dictionary parsing.
//!
//! Routing itself never fails: unknown locales coerce to the default and
//! malformed paths are normalized. These errors only surface while building a
//! router from configuration or while parsing a dictionary document.

use thiserror::Error;

/// Invariant violations detected while building a [`crate::LocaleRouter`].
#[derive(Debug, Error)]
pub enum RouterError {
    /// The configuration lists no usable locale.
    #[error("no locales configured")]
    NoLocales,
    /// A descriptor failed validation.
    #[error("invalid locale descriptor")]
    InvalidDescriptor {
        /// Position of the descriptor in the configured list.
        index: usize,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
    /// The default locale is not part of the supported set.
    #[error("default locale is not supported")]
    UnsupportedDefault {
        /// Default locale code as configured.
        locale: String,
    },
    /// Query routing was selected without a parameter name.
    #[error("query parameter name must not be empty")]
    EmptyQueryParam,
}

/// Failures while turning a fetched or on-disk document into a dictionary.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// The payload was not valid JSON.
    #[error("dictionary is not valid JSON")]
    Parse {
        /// Source JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// The JSON root was not an object.
    #[error("dictionary root must be an object")]
    NotAnObject,
}
