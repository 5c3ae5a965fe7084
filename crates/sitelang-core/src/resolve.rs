//! Current-locale resolution.
//!
//! Resolution order is a configurable precedence list. The default,
//! [`Precedence::UrlFirst`], lets a locale in the URL win and consults a stored
//! preference only when the URL carries none; [`Precedence::StoredFirst`]
//! inverts the first two steps. The configured default always closes the list.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::locale::{SupportedLocales, canonicalize};
use crate::path::detect_locale_from_path;

/// Ordering between the URL locale and a stored preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Precedence {
    /// URL locale, then stored preference, then default.
    #[default]
    UrlFirst,
    /// Stored preference, then URL locale, then default.
    StoredFirst,
}

impl Precedence {
    /// Ordered sources; the stored preference is left out when persistence is disabled.
    #[must_use]
    pub const fn order(self, use_stored: bool) -> &'static [LocaleOrigin] {
        match (self, use_stored) {
            (_, false) => &[LocaleOrigin::Url, LocaleOrigin::Default],
            (Self::UrlFirst, true) => &[
                LocaleOrigin::Url,
                LocaleOrigin::StoredPreference,
                LocaleOrigin::Default,
            ],
            (Self::StoredFirst, true) => &[
                LocaleOrigin::StoredPreference,
                LocaleOrigin::Url,
                LocaleOrigin::Default,
            ],
        }
    }

    /// Configuration spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UrlFirst => "url-first",
            Self::StoredFirst => "stored-first",
        }
    }
}

/// Where the resolved locale came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LocaleOrigin {
    /// A path segment or query parameter of the current URL.
    Url,
    /// A previously persisted user choice.
    StoredPreference,
    /// The configured default locale.
    Default,
}

/// Resolved locale plus the source that supplied it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResolvedLocale {
    /// Canonical locale code.
    pub code: String,
    /// Source of the code.
    pub origin: LocaleOrigin,
}

/// Resolve the active locale for `path`.
///
/// Walks `order`; a stored preference that is not supported is skipped.
#[must_use]
pub fn resolve_current_locale(
    path: &str,
    supported: &SupportedLocales,
    stored_preference: Option<&str>,
    default_locale: &str,
    order: &[LocaleOrigin],
) -> ResolvedLocale {
    let url_locale = detect_locale_from_path(path, supported);
    resolve_from_candidates(url_locale, supported, stored_preference, default_locale, order)
}

pub(crate) fn resolve_from_candidates(
    url_locale: Option<String>,
    supported: &SupportedLocales,
    stored_preference: Option<&str>,
    default_locale: &str,
    order: &[LocaleOrigin],
) -> ResolvedLocale {
    for origin in order {
        let candidate = match origin {
            LocaleOrigin::Url => url_locale.clone(),
            LocaleOrigin::StoredPreference => {
                stored_preference.and_then(|stored| supported.match_code(stored))
            }
            LocaleOrigin::Default => Some(canonicalize(default_locale)),
        };
        if let Some(code) = candidate {
            debug!(locale = %code, origin = ?origin, "resolved current locale");
            return ResolvedLocale {
                code,
                origin: *origin,
            };
        }
    }

    ResolvedLocale {
        code: canonicalize(default_locale),
        origin: LocaleOrigin::Default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn supported() -> SupportedLocales {
        SupportedLocales::from_codes(["en", "zh-hans", "de"])
    }

    #[test]
    fn url_locale_wins_by_default() {
        let order = Precedence::UrlFirst.order(true);
        let resolved = resolve_current_locale("/en/docs", &supported(), Some("de"), "zh-hans", order);
        assert_eq!(resolved.code, "en");
        assert_eq!(resolved.origin, LocaleOrigin::Url);
    }

    #[test]
    fn stored_preference_fills_in_when_url_has_none() {
        let order = Precedence::UrlFirst.order(true);
        let resolved = resolve_current_locale("/docs", &supported(), Some("DE"), "zh-hans", order);
        assert_eq!(resolved.code, "de");
        assert_eq!(resolved.origin, LocaleOrigin::StoredPreference);
    }

    #[test]
    fn stored_first_overrides_url() {
        let order = Precedence::StoredFirst.order(true);
        let resolved = resolve_current_locale("/en/docs", &supported(), Some("de"), "zh-hans", order);
        assert_eq!(resolved.code, "de");
    }

    #[test]
    fn unknown_or_disabled_preference_falls_back_to_default() {
        let with_stored = Precedence::UrlFirst.order(true);
        let resolved = resolve_current_locale("/", &supported(), Some("xx"), "ZH_Hans", with_stored);
        assert_eq!(resolved.code, "zh-hans");
        assert_eq!(resolved.origin, LocaleOrigin::Default);

        let without_stored = Precedence::StoredFirst.order(false);
        let resolved = resolve_current_locale("/", &supported(), Some("de"), "zh-hans", without_stored);
        assert_eq!(resolved.code, "zh-hans");
    }

    #[test]
    fn empty_order_still_yields_default() {
        let resolved = resolve_current_locale("/en", &supported(), None, "zh-hans", &[]);
        assert_eq!(resolved.code, "zh-hans");
        assert_eq!(resolved.origin, LocaleOrigin::Default);
    }
}
