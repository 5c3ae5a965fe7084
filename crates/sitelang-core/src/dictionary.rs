//! Layered translation dictionaries and DOM substitution planning.
//!
//! # Design
//! - Dictionaries are JSON objects; keys are looked up literally first, then as
//!   dotted paths through nested objects and array indices.
//! - Layers are consulted in order (locale, its fallbacks, the default); the first hit wins.
//! - Missing keys produce no substitution so the markup's existing text survives.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use tracing::warn;

use crate::error::DictionaryError;
use crate::locale::canonicalize;
use crate::path::normalize_base;

/// Key rendered into the document title.
pub const TITLE_KEY: &str = "meta.title";
/// Key rendered into `<meta name="description">`.
pub const DESCRIPTION_KEY: &str = "meta.description";

static PLACEHOLDER: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").ok());

/// One locale's translation document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dictionary {
    tree: Value,
}

impl Dictionary {
    /// Parse a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Parse`] for invalid JSON and
    /// [`DictionaryError::NotAnObject`] when the root is not an object.
    pub fn from_json_str(raw: &str) -> Result<Self, DictionaryError> {
        let value = serde_json::from_str(raw).map_err(|source| DictionaryError::Parse { source })?;
        Self::from_value(value)
    }

    /// Wrap an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::NotAnObject`] when `value` is not an object.
    pub fn from_value(value: Value) -> Result<Self, DictionaryError> {
        if value.is_object() {
            Ok(Self { tree: value })
        } else {
            Err(DictionaryError::NotAnObject)
        }
    }

    /// Text for `key`, if it resolves to a string, number, or boolean.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<String> {
        let key = key.trim();
        if key.is_empty() {
            return None;
        }
        let node = self
            .tree
            .get(key)
            .or_else(|| walk(&self.tree, key))?;
        scalar_text(node)
    }
}

fn walk<'a>(tree: &'a Value, key: &str) -> Option<&'a Value> {
    let mut node = tree;
    for segment in key.split('.') {
        node = match node {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(node)
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

/// Ordered stack of dictionaries; lookups take the first layer that answers.
#[derive(Clone, Debug, Default)]
pub struct LayeredDictionary {
    layers: Vec<(String, Dictionary)>,
}

impl LayeredDictionary {
    /// Empty stack; every lookup misses.
    #[must_use]
    pub const fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Locale codes to consult for `locale`: itself, its fallbacks, then the default.
    ///
    /// Codes are canonicalized and deduplicated in order.
    #[must_use]
    pub fn chain(locale: &str, fallbacks: &[String], default_locale: &str) -> Vec<String> {
        let mut chain: Vec<String> = Vec::new();
        let candidates = std::iter::once(locale)
            .chain(fallbacks.iter().map(String::as_str))
            .chain(std::iter::once(default_locale));
        for candidate in candidates {
            let code = canonicalize(candidate);
            if !code.is_empty() && !chain.contains(&code) {
                chain.push(code);
            }
        }
        chain
    }

    /// Build layers for `chain`, skipping locales the loader cannot supply.
    pub fn load<F>(chain: &[String], mut loader: F) -> Self
    where
        F: FnMut(&str) -> Option<Dictionary>,
    {
        let mut layered = Self::new();
        for code in chain {
            match loader(code) {
                Some(dictionary) => layered.push(code.clone(), dictionary),
                None => warn!(locale = %code, "dictionary unavailable; skipping layer"),
            }
        }
        layered
    }

    /// Append a layer below the existing ones.
    pub fn push(&mut self, locale: impl Into<String>, dictionary: Dictionary) {
        self.layers.push((locale.into(), dictionary));
    }

    /// Locale codes of the loaded layers, in lookup order.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.layers.iter().map(|(code, _)| code.as_str())
    }

    /// Whether no layer is loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Text for `key` from the first layer that has it.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.layers
            .iter()
            .find_map(|(_, dictionary)| dictionary.lookup(key))
    }
}

/// Replace `{name}` placeholders with values from `vars`; unknown names stay verbatim.
#[must_use]
pub fn format_vars(text: &str, vars: &HashMap<String, String>) -> String {
    let Some(pattern) = PLACEHOLDER.as_ref() else {
        return text.to_string();
    };
    pattern
        .replace_all(text, |captures: &regex::Captures<'_>| {
            vars.get(&captures[1])
                .cloned()
                .unwrap_or_else(|| captures[0].to_string())
        })
        .into_owned()
}

/// Parse a `data-i18n-attr` value such as `"title:nav.home; aria-label:nav.label"`.
///
/// Rules are separated by `;` or `,`; malformed rules are skipped.
#[must_use]
pub fn parse_attr_rules(raw: &str) -> Vec<(String, String)> {
    raw.split([';', ','])
        .filter_map(|rule| {
            let (attribute, key) = rule.split_once(':')?;
            let (attribute, key) = (attribute.trim(), key.trim());
            (!attribute.is_empty() && !key.is_empty())
                .then(|| (attribute.to_string(), key.to_string()))
        })
        .collect()
}

/// Translation hook found on an element; `element` indexes the caller's element list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Binding {
    /// `data-i18n="key"`: replace the text content.
    Text {
        /// Element index.
        element: usize,
        /// Dictionary key.
        key: String,
    },
    /// One rule of `data-i18n-attr`: replace an attribute value.
    Attribute {
        /// Element index.
        element: usize,
        /// Attribute name.
        attribute: String,
        /// Dictionary key.
        key: String,
    },
}

/// What a substitution writes to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubstitutionTarget {
    /// Text content of an element.
    Text(usize),
    /// Named attribute of an element.
    Attribute(usize, String),
    /// The document title.
    Title,
    /// Content of `<meta name="description">`.
    MetaDescription,
}

/// A resolved write into the document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Substitution {
    /// Destination.
    pub target: SubstitutionTarget,
    /// Translated, variable-expanded value.
    pub value: String,
}

/// Resolve `bindings` against `dictionary`.
///
/// The title and meta description keys are always attempted. Bindings whose key
/// is missing are left out.
#[must_use]
pub fn plan_substitutions(
    bindings: &[Binding],
    dictionary: &LayeredDictionary,
    vars: &HashMap<String, String>,
) -> Vec<Substitution> {
    let resolve = |key: &str| dictionary.lookup(key).map(|text| format_vars(&text, vars));

    let mut plan: Vec<Substitution> = bindings
        .iter()
        .filter_map(|binding| match binding {
            Binding::Text { element, key } => resolve(key).map(|value| Substitution {
                target: SubstitutionTarget::Text(*element),
                value,
            }),
            Binding::Attribute {
                element,
                attribute,
                key,
            } => resolve(key).map(|value| Substitution {
                target: SubstitutionTarget::Attribute(*element, attribute.clone()),
                value,
            }),
        })
        .collect();

    if let Some(value) = resolve(TITLE_KEY) {
        plan.push(Substitution {
            target: SubstitutionTarget::Title,
            value,
        });
    }
    if let Some(value) = resolve(DESCRIPTION_KEY) {
        plan.push(Substitution {
            target: SubstitutionTarget::MetaDescription,
            value,
        });
    }
    plan
}

/// Location of the dictionary resource for `locale` under `base_path`.
#[must_use]
pub fn dictionary_path(base_path: &str, locale: &str) -> String {
    format!("{}locales/{}.json", normalize_base(base_path), canonicalize(locale))
}
