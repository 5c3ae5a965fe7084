//! Raw configuration documents and their conversion into router types.

use serde::Deserialize;
use sitelang_core::{LocaleDescriptor, LocaleSource, Placement, Precedence, canonicalize};

use crate::defaults::default_external_code;

/// One entry of `languages.json` as authored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageEntry {
    /// Locale code; entries without one are skipped.
    #[serde(default)]
    pub code: Option<String>,
    /// Display label; the code is used when absent.
    #[serde(default)]
    pub name: Option<String>,
    /// Document-language alias.
    #[serde(default, alias = "htmlLang", alias = "html_lang")]
    pub external_code: Option<String>,
    /// Right-to-left flag.
    #[serde(default)]
    pub rtl: bool,
    /// Dictionary fallback chain.
    #[serde(default)]
    pub fallbacks: Vec<String>,
}

impl LanguageEntry {
    /// Convert into a descriptor, or `None` when the code is blank.
    ///
    /// The code keeps its authored casing; a missing alias is filled from
    /// [`default_external_code`].
    #[must_use]
    pub fn into_descriptor(self) -> Option<LocaleDescriptor> {
        let code = self.code.as_deref().map(str::trim).unwrap_or_default();
        if code.is_empty() {
            return None;
        }
        let label = self
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(code);

        let mut descriptor = LocaleDescriptor::new(code, label)
            .with_rtl(self.rtl)
            .with_fallbacks(self.fallbacks.iter().filter(|fallback| !fallback.trim().is_empty()));
        let alias = self
            .external_code
            .as_deref()
            .map(str::trim)
            .filter(|alias| !alias.is_empty())
            .or_else(|| default_external_code(&canonicalize(code)));
        if let Some(alias) = alias {
            descriptor = descriptor.with_external_code(alias);
        }
        Some(descriptor)
    }
}

/// Router settings gathered from the environment; `None` keeps the router default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouterSettings {
    /// Default locale; the first configured locale when absent.
    pub default_locale: Option<String>,
    /// Serve the default locale without a segment.
    pub root_serves_default: Option<bool>,
    /// Path or query routing.
    pub locale_source: Option<LocaleSource>,
    /// Query parameter name.
    pub query_param: Option<String>,
    /// Persist the chosen locale.
    pub persist_preference: Option<bool>,
    /// URL vs stored preference ordering.
    pub precedence: Option<Precedence>,
    /// Locale segment placement.
    pub placement: Option<Placement>,
    /// Declared base path.
    pub base_path: Option<String>,
    /// Preference storage key.
    pub storage_key: Option<String>,
}
