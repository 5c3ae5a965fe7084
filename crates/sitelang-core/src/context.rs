//! Href parsing into the transient routing context.

use serde::Serialize;

use crate::locale::SupportedLocales;
use crate::path::{infer_base_path, normalize_path, split_origin};

/// Per-navigation view of the current URL.
///
/// Built fresh for every page load or selection and discarded afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoutingContext {
    /// `scheme://authority` or `//authority` when the href carried one.
    pub origin: Option<String>,
    /// Normalized path (leading `/`, no `//`).
    pub path: String,
    /// Query string without the leading `?`.
    pub query: String,
    /// Fragment without the leading `#`.
    pub fragment: String,
    /// Application base path, `/`-terminated.
    pub base_path: String,
}

impl RoutingContext {
    /// Parse `href` and infer the base path from `declared_base` or the path itself.
    #[must_use]
    pub fn from_href(href: &str, declared_base: Option<&str>, supported: &SupportedLocales) -> Self {
        let href = href.trim();
        let (rest, fragment) = href.split_once('#').unwrap_or((href, ""));
        let (rest, query) = rest.split_once('?').unwrap_or((rest, ""));
        let (origin, raw_path) = split_origin(rest);
        let path = normalize_path(raw_path);
        let base_path = infer_base_path(declared_base, &path, supported);

        Self {
            origin: origin.map(str::to_string),
            path,
            query: query.to_string(),
            fragment: fragment.to_string(),
            base_path,
        }
    }

    /// Compose an href from this context with `path` and `query` replaced.
    #[must_use]
    pub fn href_with(&self, path: &str, query: &str) -> String {
        let mut href = self.origin.clone().unwrap_or_default();
        href.push_str(&normalize_path(path));
        if !query.is_empty() {
            href.push('?');
            href.push_str(query);
        }
        if !self.fragment.is_empty() {
            href.push('#');
            href.push_str(&self.fragment);
        }
        href
    }

    /// Compose an href with `path` replaced, keeping query and fragment.
    #[must_use]
    pub fn href_with_path(&self, path: &str) -> String {
        self.href_with(path, &self.query)
    }
}
