//! DOM-free page plumbing shared by the browser bindings.
//!
//! # Design
//! - The page embeds its router configuration as JSON in
//!   `<script id="sitelang-config" type="application/json">`.
//! - A `<base href>` declaration fills in the base path when the JSON has none.
//! - Element hooks are read as raw attribute values and turned into bindings here,
//!   so the parsing is testable without a browser.

use std::collections::HashMap;

use serde::Deserialize;
use sitelang_core::{
    Binding, DocumentLanguage, LayeredDictionary, LocaleRouter, RouterConfig, dictionary_path,
    parse_attr_rules,
};

/// Id of the script element carrying the page configuration.
pub const PAGE_CONFIG_ELEMENT_ID: &str = "sitelang-config";
/// Id of the element the locale selector mounts into.
pub const SELECTOR_ROOT_ID: &str = "sitelang-locale-select";
/// Attribute naming the dictionary key for an element's text.
pub const TEXT_ATTRIBUTE: &str = "data-i18n";
/// Attribute carrying `attr:key` rules for an element's attributes.
pub const ATTR_RULES_ATTRIBUTE: &str = "data-i18n-attr";
/// Selector matching every element with a translation hook.
pub const HOOK_SELECTOR: &str = "[data-i18n], [data-i18n-attr]";

/// Configuration embedded in the page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageConfig {
    /// Router settings; see [`RouterConfig`].
    #[serde(flatten)]
    pub router: RouterConfig,
    /// Placeholder values for `{name}` substitution.
    #[serde(default)]
    pub vars: HashMap<String, String>,
}

impl PageConfig {
    /// Parse the embedded JSON, filling gaps from the page.
    ///
    /// A blank default locale becomes the first configured locale; a missing
    /// base path comes from `base_href` when the page declares one.
    ///
    /// # Errors
    ///
    /// Returns the JSON error when `raw` is not a valid configuration object.
    pub fn from_json(raw: &str, base_href: Option<&str>) -> Result<Self, serde_json::Error> {
        let mut page: Self = serde_json::from_str(raw)?;
        let router = &mut page.router;
        router.default_locale = router.effective_default().unwrap_or_default().to_string();
        if router.base_path.is_none() {
            router.base_path = base_href
                .map(str::trim)
                .filter(|href| !href.is_empty())
                .map(str::to_string);
        }
        Ok(page)
    }
}

/// Attributes written on `<html>` for `language`.
#[must_use]
pub fn document_attributes(language: &DocumentLanguage) -> [(&'static str, &str); 2] {
    [
        ("lang", language.tag.as_str()),
        ("dir", language.direction.as_str()),
    ]
}

/// Translation hooks of one element, as raw attribute values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementHooks {
    /// Value of `data-i18n`.
    pub text_key: Option<String>,
    /// Value of `data-i18n-attr`.
    pub attr_rules: Option<String>,
}

/// Bindings for `elements`, indexed by their position in the slice.
#[must_use]
pub fn collect_bindings(elements: &[ElementHooks]) -> Vec<Binding> {
    let mut bindings = Vec::new();
    for (element, hooks) in elements.iter().enumerate() {
        if let Some(key) = hooks
            .text_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
        {
            bindings.push(Binding::Text {
                element,
                key: key.to_string(),
            });
        }
        let rules = hooks.attr_rules.as_deref().unwrap_or_default();
        bindings.extend(
            parse_attr_rules(rules)
                .into_iter()
                .map(|(attribute, key)| Binding::Attribute {
                    element,
                    attribute,
                    key,
                }),
        );
    }
    bindings
}

/// Dictionary layers to fetch for `locale`: `(code, url)` in lookup order.
#[must_use]
pub fn dictionary_sources(router: &LocaleRouter, locale: &str, base_path: &str) -> Vec<(String, String)> {
    let fallbacks = router
        .descriptor(locale)
        .map(|descriptor| descriptor.fallbacks.clone())
        .unwrap_or_default();
    LayeredDictionary::chain(locale, &fallbacks, router.default_locale())
        .into_iter()
        .map(|code| {
            let url = dictionary_path(base_path, &code);
            (code, url)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitelang_core::LocaleSource;

    const PAGE: &str = r#"{
        "locales": [
            {"code": "zh-hans", "name": "简体中文", "external_code": "zh-CN"},
            {"code": "zh-hant", "label": "繁體中文", "fallbacks": ["zh-hans"]},
            {"code": "en", "label": "English"}
        ],
        "locale_source": "path",
        "vars": {"company": "TreeHouse"}
    }"#;

    #[test]
    fn page_config_fills_default_and_base() {
        let page = PageConfig::from_json(PAGE, Some("/site/")).expect("page config");
        assert_eq!(page.router.default_locale, "zh-hans");
        assert_eq!(page.router.base_path.as_deref(), Some("/site/"));
        assert_eq!(page.router.locale_source, LocaleSource::Path);
        assert_eq!(page.router.locales[0].label, "简体中文");
        assert_eq!(page.vars.get("company").map(String::as_str), Some("TreeHouse"));

        let without_base = PageConfig::from_json(PAGE, Some("  ")).expect("page config");
        assert_eq!(without_base.router.base_path, None);
    }

    #[test]
    fn page_config_rejects_malformed_json() {
        assert!(PageConfig::from_json("{\"locales\": 3}", None).is_err());
    }

    #[test]
    fn document_attributes_carry_tag_and_direction() {
        let page = PageConfig::from_json(PAGE, None).expect("page config");
        let router = LocaleRouter::new(page.router).expect("router");
        assert_eq!(
            document_attributes(&router.document_language("zh-hans")),
            [("lang", "zh-CN"), ("dir", "ltr")]
        );
    }

    #[test]
    fn bindings_follow_element_order() {
        let elements = vec![
            ElementHooks {
                text_key: Some("hero.title".to_string()),
                attr_rules: None,
            },
            ElementHooks {
                text_key: Some("  ".to_string()),
                attr_rules: Some("alt:hero.alt; title:hero.tip".to_string()),
            },
        ];
        assert_eq!(
            collect_bindings(&elements),
            vec![
                Binding::Text {
                    element: 0,
                    key: "hero.title".to_string(),
                },
                Binding::Attribute {
                    element: 1,
                    attribute: "alt".to_string(),
                    key: "hero.alt".to_string(),
                },
                Binding::Attribute {
                    element: 1,
                    attribute: "title".to_string(),
                    key: "hero.tip".to_string(),
                },
            ]
        );
    }

    #[test]
    fn dictionary_sources_follow_fallback_chain() {
        let page = PageConfig::from_json(PAGE, None).expect("page config");
        let router = LocaleRouter::new(page.router).expect("router");
        assert_eq!(
            dictionary_sources(&router, "zh-hant", "/site/"),
            vec![
                ("zh-hant".to_string(), "/site/locales/zh-hant.json".to_string()),
                ("zh-hans".to_string(), "/site/locales/zh-hans.json".to_string()),
            ]
        );
        assert_eq!(
            dictionary_sources(&router, "en", "/"),
            vec![
                ("en".to_string(), "/locales/en.json".to_string()),
                ("zh-hans".to_string(), "/locales/zh-hans.json".to_string()),
            ]
        );
    }
}
