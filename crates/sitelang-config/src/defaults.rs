//! Environment variable names and fallback values.
//!
//! # Design
//! - Keep every env name in one place so the CLI help and loader agree.
//! - Document-language aliases cover the Chinese variants whose BCP-47 casing alone is wrong.

/// Default location of the languages document, relative to the site checkout.
pub const DEFAULT_LANGUAGES_FILE: &str = "src/assets/languages.json";
/// Env var naming the languages document.
pub const ENV_LANGUAGES_FILE: &str = "SITELANG_LANGUAGES_FILE";
/// Default directory holding `<locale>.json` dictionaries.
pub const DEFAULT_LOCALES_DIR: &str = "src/locales";
/// Env var naming the dictionary directory.
pub const ENV_LOCALES_DIR: &str = "SITELANG_LOCALES_DIR";
/// Env var for the default locale.
pub const ENV_DEFAULT_LOCALE: &str = "SITELANG_DEFAULT_LOCALE";
/// Env var toggling root-served default.
pub const ENV_ROOT_SERVES_DEFAULT: &str = "SITELANG_ROOT_SERVES_DEFAULT";
/// Env var selecting `path` or `query` routing.
pub const ENV_LOCALE_SOURCE: &str = "SITELANG_LOCALE_SOURCE";
/// Env var for the query parameter name.
pub const ENV_QUERY_PARAM: &str = "SITELANG_QUERY_PARAM";
/// Env var toggling preference persistence.
pub const ENV_PERSIST_PREFERENCE: &str = "SITELANG_PERSIST_PREFERENCE";
/// Env var selecting `url-first` or `stored-first`.
pub const ENV_PRECEDENCE: &str = "SITELANG_PRECEDENCE";
/// Env var selecting `after-base` or `site-root`.
pub const ENV_PLACEMENT: &str = "SITELANG_PLACEMENT";
/// Env var declaring the base path.
pub const ENV_BASE_PATH: &str = "SITELANG_BASE_PATH";
/// Env var for the preference storage key.
pub const ENV_STORAGE_KEY: &str = "SITELANG_STORAGE_KEY";

/// Document-language alias used when a languages entry declares none.
#[must_use]
pub fn default_external_code(canonical: &str) -> Option<&'static str> {
    match canonical {
        "zh-hans" | "zh-cn" => Some("zh-CN"),
        "zh-hant" | "zh-tw" => Some("zh-Hant"),
        "zh-hk" => Some("zh-HK"),
        _ => None,
    }
}
