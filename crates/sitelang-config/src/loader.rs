//! Reading `languages.json` and environment settings into a router configuration.
//!
//! # Design
//! - Environment access goes through a lookup closure so callers and tests control it.
//! - Unset or blank variables keep the router defaults; malformed values are errors.
//! - The assembled configuration is validated before it is returned.

use std::fs;
use std::path::Path;

use sitelang_core::{LocaleDescriptor, LocaleRouter, RouterConfig};
use tracing::{debug, info};

use crate::defaults::{
    ENV_BASE_PATH, ENV_DEFAULT_LOCALE, ENV_LOCALE_SOURCE, ENV_PERSIST_PREFERENCE, ENV_PLACEMENT,
    ENV_PRECEDENCE, ENV_QUERY_PARAM, ENV_ROOT_SERVES_DEFAULT, ENV_STORAGE_KEY,
};
use crate::error::{ConfigError, ConfigResult};
use crate::model::{LanguageEntry, RouterSettings};
use crate::validate::{
    non_blank, parse_bool, parse_locale_source, parse_placement, parse_precedence,
};

/// Parse a `languages.json` document.
///
/// Entries with a blank code are skipped.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] when the document is not a JSON array of entries.
pub fn parse_languages(raw: &str) -> ConfigResult<Vec<LocaleDescriptor>> {
    let entries: Vec<LanguageEntry> =
        serde_json::from_str(raw).map_err(|source| ConfigError::Parse { source })?;
    let total = entries.len();
    let descriptors: Vec<LocaleDescriptor> = entries
        .into_iter()
        .filter_map(LanguageEntry::into_descriptor)
        .collect();
    if descriptors.len() < total {
        debug!(
            skipped = total - descriptors.len(),
            "skipped languages entries without a code"
        );
    }
    Ok(descriptors)
}

/// Read and parse the languages document at `path`.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] when the file cannot be read, or the
/// [`parse_languages`] errors.
pub fn load_languages(path: &Path) -> ConfigResult<Vec<LocaleDescriptor>> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        operation: "read_languages",
        path: path.to_path_buf(),
        source,
    })?;
    parse_languages(&raw)
}

/// Collect router settings through `lookup`.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] naming the variable whose value is malformed.
pub fn settings_from_env<F>(lookup: F) -> ConfigResult<RouterSettings>
where
    F: Fn(&str) -> Option<String>,
{
    let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

    Ok(RouterSettings {
        default_locale: read(ENV_DEFAULT_LOCALE).map(|value| value.trim().to_string()),
        root_serves_default: read(ENV_ROOT_SERVES_DEFAULT)
            .map(|value| parse_bool(ENV_ROOT_SERVES_DEFAULT, &value))
            .transpose()?,
        locale_source: read(ENV_LOCALE_SOURCE)
            .map(|value| parse_locale_source(ENV_LOCALE_SOURCE, &value))
            .transpose()?,
        query_param: read(ENV_QUERY_PARAM)
            .map(|value| non_blank(ENV_QUERY_PARAM, &value))
            .transpose()?,
        persist_preference: read(ENV_PERSIST_PREFERENCE)
            .map(|value| parse_bool(ENV_PERSIST_PREFERENCE, &value))
            .transpose()?,
        precedence: read(ENV_PRECEDENCE)
            .map(|value| parse_precedence(ENV_PRECEDENCE, &value))
            .transpose()?,
        placement: read(ENV_PLACEMENT)
            .map(|value| parse_placement(ENV_PLACEMENT, &value))
            .transpose()?,
        base_path: read(ENV_BASE_PATH).map(|value| value.trim().to_string()),
        storage_key: read(ENV_STORAGE_KEY)
            .map(|value| non_blank(ENV_STORAGE_KEY, &value))
            .transpose()?,
    })
}

/// Combine descriptors and settings into a validated configuration.
///
/// # Errors
///
/// Returns [`ConfigError::Router`] when no locale is configured or the default
/// locale is not among them.
pub fn build_router_config(
    locales: Vec<LocaleDescriptor>,
    settings: RouterSettings,
) -> ConfigResult<RouterConfig> {
    let mut config = RouterConfig::new(locales, settings.default_locale.unwrap_or_default());
    config.default_locale = config.effective_default().unwrap_or_default().to_string();
    if let Some(root) = settings.root_serves_default {
        config.root_serves_default = root;
    }
    if let Some(source) = settings.locale_source {
        config.locale_source = source;
    }
    if let Some(param) = settings.query_param {
        config.query_param = param;
    }
    if let Some(persist) = settings.persist_preference {
        config.persist_preference = persist;
    }
    if let Some(precedence) = settings.precedence {
        config.precedence = precedence;
    }
    if let Some(placement) = settings.placement {
        config.placement = placement;
    }
    if let Some(key) = settings.storage_key {
        config.storage_key = key;
    }
    config.base_path = settings.base_path;

    config.validate()?;
    Ok(config)
}

/// Load `languages.json` from `path` and apply settings read through `lookup`.
///
/// # Errors
///
/// Propagates [`load_languages`], [`settings_from_env`], and
/// [`build_router_config`] failures.
pub fn load_router_config<F>(path: &Path, lookup: F) -> ConfigResult<RouterConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let locales = load_languages(path)?;
    let settings = settings_from_env(lookup)?;
    let config = build_router_config(locales, settings)?;
    info!(
        path = %path.display(),
        locales = config.locales.len(),
        default_locale = %config.default_locale,
        source = config.locale_source.as_str(),
        "loaded router configuration"
    );
    Ok(config)
}

/// Load the configuration and build a [`LocaleRouter`] from it.
///
/// # Errors
///
/// Propagates [`load_router_config`] failures.
pub fn load_router<F>(path: &Path, lookup: F) -> ConfigResult<LocaleRouter>
where
    F: Fn(&str) -> Option<String>,
{
    let config = load_router_config(path, lookup)?;
    Ok(LocaleRouter::new(config)?)
}
