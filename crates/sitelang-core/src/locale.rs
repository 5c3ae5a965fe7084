//! Locale codes, descriptors, and the supported set.
//!
//! # Design
//! - Codes are compared in canonical form only: trimmed, `_` replaced by `-`, lowercase.
//! - Descriptors are authored once and never mutated; the supported set is derived from them.
//! - Document language tags are re-cased per BCP-47 conventions at the boundary.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Canonicalize a locale code for comparison.
///
/// Trims whitespace, replaces underscores with hyphens, and lowercases. Empty
/// input yields an empty string.
#[must_use]
pub fn canonicalize(code: &str) -> String {
    code.trim().replace('_', "-").to_lowercase()
}

/// Re-case a locale tag per BCP-47 conventions.
///
/// The language subtag is lowercased, 4-letter script subtags are title-cased,
/// and 2–3 character region subtags are uppercased: `zh_hans` → `zh-Hans`,
/// `en-gb` → `en-GB`.
#[must_use]
pub fn bcp47_case(tag: &str) -> String {
    canonicalize(tag)
        .split('-')
        .filter(|subtag| !subtag.is_empty())
        .enumerate()
        .map(|(index, subtag)| {
            if index == 0 {
                subtag.to_string()
            } else if subtag.len() == 4 && subtag.chars().all(|ch| ch.is_ascii_alphabetic()) {
                title_case(subtag)
            } else if (2..=3).contains(&subtag.len()) {
                subtag.to_ascii_uppercase()
            } else {
                subtag.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}

fn title_case(subtag: &str) -> String {
    let mut chars = subtag.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_ascii_uppercase().to_string() + chars.as_str()
    })
}

/// Text direction written to the document alongside its language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    /// Left-to-right scripts.
    #[default]
    Ltr,
    /// Right-to-left scripts.
    Rtl,
}

impl TextDirection {
    /// Attribute value for the document `dir` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

/// Language tag and direction applied to the document root.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DocumentLanguage {
    /// BCP-47 tag for the `lang` attribute.
    pub tag: String,
    /// Direction for the `dir` attribute.
    pub direction: TextDirection,
}

/// One configured locale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleDescriptor {
    /// Locale code as authored; compared in canonical form.
    pub code: String,
    /// Human-friendly label for the selector.
    #[serde(alias = "name")]
    pub label: String,
    /// Platform alias used for the document language (for example `zh-CN` for `zh-hans`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_code: Option<String>,
    /// Whether the locale is written right-to-left.
    #[serde(default)]
    pub rtl: bool,
    /// Locale codes consulted, in order, when a dictionary key is missing.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fallbacks: Vec<String>,
}

impl LocaleDescriptor {
    /// Build a left-to-right descriptor without alias or fallbacks.
    #[must_use]
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
            external_code: None,
            rtl: false,
            fallbacks: Vec::new(),
        }
    }

    /// Attach a platform alias used for the document language.
    #[must_use]
    pub fn with_external_code(mut self, external_code: impl Into<String>) -> Self {
        self.external_code = Some(external_code.into());
        self
    }

    /// Mark the locale as right-to-left.
    #[must_use]
    pub const fn with_rtl(mut self, rtl: bool) -> Self {
        self.rtl = rtl;
        self
    }

    /// Set dictionary fallbacks.
    #[must_use]
    pub fn with_fallbacks<I, S>(mut self, fallbacks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fallbacks = fallbacks.into_iter().map(Into::into).collect();
        self
    }

    /// Canonical form of [`Self::code`].
    #[must_use]
    pub fn canonical_code(&self) -> String {
        canonicalize(&self.code)
    }

    /// Language tag and direction for the document root.
    #[must_use]
    pub fn document_language(&self) -> DocumentLanguage {
        let source = self
            .external_code
            .as_deref()
            .filter(|alias| !alias.trim().is_empty())
            .unwrap_or(&self.code);
        DocumentLanguage {
            tag: bcp47_case(source),
            direction: if self.rtl {
                TextDirection::Rtl
            } else {
                TextDirection::Ltr
            },
        }
    }
}

/// Canonical codes of the configured locales, used for membership tests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SupportedLocales {
    codes: BTreeSet<String>,
}

impl SupportedLocales {
    /// Derive the set from descriptors; duplicates and empty codes collapse away.
    #[must_use]
    pub fn from_descriptors(descriptors: &[LocaleDescriptor]) -> Self {
        Self::from_codes(descriptors.iter().map(|descriptor| descriptor.code.as_str()))
    }

    /// Derive the set from raw codes.
    #[must_use]
    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let codes = codes
            .into_iter()
            .map(|code| canonicalize(code.as_ref()))
            .filter(|code| !code.is_empty())
            .collect();
        Self { codes }
    }

    /// Whether `code` canonicalizes to a supported locale.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(&canonicalize(code))
    }

    /// Canonical code for `candidate` when it is supported.
    #[must_use]
    pub fn match_code(&self, candidate: &str) -> Option<String> {
        let canonical = canonicalize(candidate);
        self.codes.contains(&canonical).then_some(canonical)
    }

    /// Number of distinct locales.
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether no locale is supported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate canonical codes in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }
}

/// Canonical codes of all configured locales, duplicates collapsed.
#[must_use]
pub fn supported_set(descriptors: &[LocaleDescriptor]) -> SupportedLocales {
    SupportedLocales::from_descriptors(descriptors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalize_trims_lowercases_and_hyphenates() {
        assert_eq!(canonicalize("  zh_Hans "), "zh-hans");
        assert_eq!(canonicalize("EN-gb"), "en-gb");
        assert_eq!(canonicalize(""), "");
        assert_eq!(canonicalize("   "), "");
    }

    #[test]
    fn bcp47_case_recases_script_and_region() {
        assert_eq!(bcp47_case("zh-hans"), "zh-Hans");
        assert_eq!(bcp47_case("en_gb"), "en-GB");
        assert_eq!(bcp47_case("ZH-HANT-TW"), "zh-Hant-TW");
        assert_eq!(bcp47_case("es-419"), "es-419");
        assert_eq!(bcp47_case("de"), "de");
    }

    #[test]
    fn supported_set_collapses_duplicates_and_empties() {
        let descriptors = vec![
            LocaleDescriptor::new("en", "English"),
            LocaleDescriptor::new("EN", "English again"),
            LocaleDescriptor::new("zh_Hans", "简体中文"),
            LocaleDescriptor::new("  ", "blank"),
        ];
        let set = supported_set(&descriptors);
        assert_eq!(set.len(), 2);
        assert!(set.contains("en"));
        assert!(set.contains("ZH-hans"));
        assert_eq!(set.match_code("zh_HANS").as_deref(), Some("zh-hans"));
        assert!(set.match_code("fr").is_none());
    }

    #[test]
    fn document_language_prefers_external_alias() {
        let simplified = LocaleDescriptor::new("zh-hans", "简体中文").with_external_code("zh-cn");
        assert_eq!(simplified.document_language().tag, "zh-CN");

        let arabic = LocaleDescriptor::new("ar", "العربية").with_rtl(true);
        let language = arabic.document_language();
        assert_eq!(language.tag, "ar");
        assert_eq!(language.direction, TextDirection::Rtl);

        let blank_alias = LocaleDescriptor::new("en-gb", "English (UK)").with_external_code(" ");
        assert_eq!(blank_alias.document_language().tag, "en-GB");
    }
}
