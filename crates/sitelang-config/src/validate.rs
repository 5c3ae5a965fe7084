//! Parsing helpers for individual setting values.

use sitelang_core::{LocaleSource, Placement, Precedence};

use crate::error::{ConfigError, ConfigResult};

/// Parse a boolean flag: `1/0`, `true/false`, `yes/no`, `on/off`, case-insensitive.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] for any other value.
pub fn parse_bool(field: &str, raw: &str) -> ConfigResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::invalid_field(field, Some(raw), "expected_boolean")),
    }
}

/// Parse `path` or `query`.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] for any other value.
pub fn parse_locale_source(field: &str, raw: &str) -> ConfigResult<LocaleSource> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "path" => Ok(LocaleSource::Path),
        "query" => Ok(LocaleSource::Query),
        _ => Err(ConfigError::invalid_field(field, Some(raw), "unknown_locale_source")),
    }
}

/// Parse `url-first` or `stored-first` (underscores accepted).
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] for any other value.
pub fn parse_precedence(field: &str, raw: &str) -> ConfigResult<Precedence> {
    match raw.trim().to_ascii_lowercase().replace('_', "-").as_str() {
        "url-first" => Ok(Precedence::UrlFirst),
        "stored-first" => Ok(Precedence::StoredFirst),
        _ => Err(ConfigError::invalid_field(field, Some(raw), "unknown_precedence")),
    }
}

/// Parse `after-base` or `site-root` (underscores accepted).
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] for any other value.
pub fn parse_placement(field: &str, raw: &str) -> ConfigResult<Placement> {
    match raw.trim().to_ascii_lowercase().replace('_', "-").as_str() {
        "after-base" => Ok(Placement::AfterBase),
        "site-root" => Ok(Placement::SiteRoot),
        _ => Err(ConfigError::invalid_field(field, Some(raw), "unknown_placement")),
    }
}

/// Trimmed value, rejecting blanks.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] when `raw` is blank.
pub fn non_blank(field: &str, raw: &str) -> ConfigResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::invalid_field(field, Some(raw), "must_not_be_blank"));
    }
    Ok(trimmed.to_string())
}
