//! Locale router: configuration flags plus the resolve/switch pipeline.
//!
//! # Design
//! - Configuration is an immutable value validated once at construction.
//! - Variants of the switcher (path vs query routing, persisted preference,
//!   default-at-root) are flags on [`RouterConfig`], not separate code paths.
//! - Nothing here fails at routing time; unknown selections coerce to the default.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::context::RoutingContext;
use crate::error::RouterError;
use crate::locale::{
    DocumentLanguage, LocaleDescriptor, SupportedLocales, TextDirection, bcp47_case, canonicalize,
};
use crate::path::{
    build_target_url, collapse_slashes, detect_locale_from_path, relative_to_base,
    strip_locale_from_path,
};
use crate::query::{DEFAULT_QUERY_PARAM, detect_locale_from_query, set_locale_in_query};
use crate::resolve::{LocaleOrigin, Precedence, ResolvedLocale, resolve_from_candidates};

/// Default storage key for the persisted locale choice.
pub const DEFAULT_STORAGE_KEY: &str = "sitelang.locale";

/// Where the locale lives in the URL.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleSource {
    /// A reserved path segment.
    #[default]
    Path,
    /// A query parameter.
    Query,
}

impl LocaleSource {
    /// Configuration spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Path => "path",
            Self::Query => "query",
        }
    }
}

/// Position of the locale segment relative to the base path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    /// `/<base>/<locale>/<rest>`.
    #[default]
    AfterBase,
    /// `/<locale>/<base>/<rest>`: locale directories sit at the site root.
    SiteRoot,
}

impl Placement {
    /// Configuration spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AfterBase => "after-base",
            Self::SiteRoot => "site-root",
        }
    }
}

/// Authored router configuration.
///
/// Missing fields deserialize to the values of [`RouterConfig::new`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Configured locales in display order.
    pub locales: Vec<LocaleDescriptor>,
    /// Locale used when nothing else resolves.
    pub default_locale: String,
    /// Serve the default locale without a locale segment/parameter.
    pub root_serves_default: bool,
    /// Path- or query-based routing.
    pub locale_source: LocaleSource,
    /// Query parameter name for [`LocaleSource::Query`].
    pub query_param: String,
    /// Persist the chosen locale and consult it on load.
    pub persist_preference: bool,
    /// Key under which the choice is persisted.
    pub storage_key: String,
    /// URL locale vs stored preference ordering.
    pub precedence: Precedence,
    /// Segment placement for path routing.
    pub placement: Placement,
    /// Explicit base path declaration.
    pub base_path: Option<String>,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::new(Vec::new(), String::new())
    }
}

impl RouterConfig {
    /// Configuration with path routing, root-served default, and no persistence.
    #[must_use]
    pub fn new(locales: Vec<LocaleDescriptor>, default_locale: impl Into<String>) -> Self {
        Self {
            locales,
            default_locale: default_locale.into(),
            root_serves_default: true,
            locale_source: LocaleSource::Path,
            query_param: DEFAULT_QUERY_PARAM.to_string(),
            persist_preference: false,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            precedence: Precedence::UrlFirst,
            placement: Placement::AfterBase,
            base_path: None,
        }
    }

    /// Default locale, or the first configured locale when none is set.
    #[must_use]
    pub fn effective_default(&self) -> Option<&str> {
        Some(self.default_locale.trim())
            .filter(|code| !code.is_empty())
            .or_else(|| self.locales.first().map(|descriptor| descriptor.code.as_str()))
    }

    /// Check the invariants the router relies on.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError`] when no locale is configured, a descriptor has a
    /// blank code, the default is unsupported, or query routing lacks a parameter.
    pub fn validate(&self) -> Result<SupportedLocales, RouterError> {
        if self.locales.is_empty() {
            return Err(RouterError::NoLocales);
        }
        if let Some(index) = self
            .locales
            .iter()
            .position(|descriptor| descriptor.canonical_code().is_empty())
        {
            return Err(RouterError::InvalidDescriptor {
                index,
                reason: "blank_code",
            });
        }

        let supported = SupportedLocales::from_descriptors(&self.locales);
        if !supported.contains(&self.default_locale) {
            return Err(RouterError::UnsupportedDefault {
                locale: self.default_locale.clone(),
            });
        }
        if self.locale_source == LocaleSource::Query && self.query_param.trim().is_empty() {
            return Err(RouterError::EmptyQueryParam);
        }
        Ok(supported)
    }
}

/// One entry of the rendered locale selector.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LocaleOption {
    /// Canonical code submitted on selection.
    pub code: String,
    /// Display label.
    pub label: String,
    /// Whether this is the active locale.
    pub selected: bool,
}

/// Full resolution of an href, for diagnostics and tooling.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RouteResolution {
    /// Active locale and its source.
    pub locale: ResolvedLocale,
    /// Locale found in the URL, if any.
    pub url_locale: Option<String>,
    /// Application base path.
    pub base_path: String,
    /// Path below the base with the locale removed.
    pub remaining_path: String,
    /// Document language for the active locale.
    pub document_language: DocumentLanguage,
}

/// Validated router over an immutable configuration.
#[derive(Clone, Debug)]
pub struct LocaleRouter {
    config: RouterConfig,
    supported: SupportedLocales,
    default_locale: String,
}

impl LocaleRouter {
    /// Validate `config` and build the router.
    ///
    /// # Errors
    ///
    /// Propagates [`RouterConfig::validate`] failures.
    pub fn new(config: RouterConfig) -> Result<Self, RouterError> {
        let supported = config.validate()?;
        let default_locale = canonicalize(&config.default_locale);
        Ok(Self {
            config,
            supported,
            default_locale,
        })
    }

    /// Configuration backing this router.
    #[must_use]
    pub const fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Supported canonical codes.
    #[must_use]
    pub const fn supported(&self) -> &SupportedLocales {
        &self.supported
    }

    /// Canonical default locale.
    #[must_use]
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Descriptor for `code`, compared canonically.
    #[must_use]
    pub fn descriptor(&self, code: &str) -> Option<&LocaleDescriptor> {
        let wanted = canonicalize(code);
        self.config
            .locales
            .iter()
            .find(|descriptor| descriptor.canonical_code() == wanted)
    }

    /// Parse `href` into a routing context using the configured base declaration.
    #[must_use]
    pub fn context(&self, href: &str) -> RoutingContext {
        RoutingContext::from_href(href, self.config.base_path.as_deref(), &self.supported)
    }

    /// Locale carried by the URL, according to the configured source.
    #[must_use]
    pub fn url_locale(&self, ctx: &RoutingContext) -> Option<String> {
        match self.config.locale_source {
            LocaleSource::Path => detect_locale_from_path(&ctx.path, &self.supported),
            LocaleSource::Query => {
                detect_locale_from_query(&ctx.query, &self.config.query_param, &self.supported)
            }
        }
    }

    /// Resolve the active locale for `href`, given a stored preference.
    ///
    /// The stored preference only participates when persistence is enabled.
    #[must_use]
    pub fn current_locale(&self, href: &str, stored_preference: Option<&str>) -> ResolvedLocale {
        let ctx = self.context(href);
        self.resolve_in(&ctx, stored_preference)
    }

    fn resolve_in(&self, ctx: &RoutingContext, stored_preference: Option<&str>) -> ResolvedLocale {
        let order: &[LocaleOrigin] = self
            .config
            .precedence
            .order(self.config.persist_preference);
        resolve_from_candidates(
            self.url_locale(ctx),
            &self.supported,
            stored_preference,
            &self.default_locale,
            order,
        )
    }

    /// Canonical code for a user selection; unknown selections become the default.
    #[must_use]
    pub fn coerce_selection(&self, selection: &str) -> String {
        self.supported.match_code(selection).unwrap_or_else(|| {
            warn!(selection, fallback = %self.default_locale, "unsupported locale selection");
            self.default_locale.clone()
        })
    }

    /// Base path and locale-free remainder for path routing.
    ///
    /// When the stripped path lies outside the base, the base degrades to `/`.
    fn split_remaining(&self, ctx: &RoutingContext) -> (String, String) {
        let stripped = strip_locale_from_path(&ctx.path, &self.supported);
        match relative_to_base(&stripped, &ctx.base_path) {
            Some(remaining) => (ctx.base_path.clone(), remaining),
            None => {
                debug!(path = %ctx.path, base = %ctx.base_path, "path outside base; using site root");
                ("/".to_string(), stripped)
            }
        }
    }

    /// Href that shows the current page in `target`.
    ///
    /// Query and fragment are preserved; an unsupported target coerces to the default.
    #[must_use]
    pub fn switch_href(&self, href: &str, target: &str) -> String {
        let ctx = self.context(href);
        let target = self.coerce_selection(target);
        let serve_at_root = self.config.root_serves_default && target == self.default_locale;

        let next = match self.config.locale_source {
            LocaleSource::Path => {
                let path = self.target_path(&ctx, &target);
                ctx.href_with_path(&path)
            }
            LocaleSource::Query => {
                let locale = (!serve_at_root).then_some(target.as_str());
                let query = set_locale_in_query(&ctx.query, &self.config.query_param, locale);
                ctx.href_with(&ctx.path, &query)
            }
        };
        debug!(from = href, to = %next, locale = %target, "computed locale switch");
        next
    }

    fn target_path(&self, ctx: &RoutingContext, target: &str) -> String {
        let (base, remaining) = self.split_remaining(ctx);
        let root = self.config.root_serves_default;
        match self.config.placement {
            Placement::AfterBase => {
                build_target_url(&base, &remaining, target, &self.default_locale, root)
            }
            Placement::SiteRoot => {
                let below_locale = collapse_slashes(&format!("{base}/{remaining}"));
                build_target_url("/", &below_locale, target, &self.default_locale, root)
            }
        }
    }

    /// Document language for `code`, using the descriptor alias when present.
    #[must_use]
    pub fn document_language(&self, code: &str) -> DocumentLanguage {
        self.descriptor(code).map_or_else(
            || DocumentLanguage {
                tag: bcp47_case(code),
                direction: TextDirection::Ltr,
            },
            LocaleDescriptor::document_language,
        )
    }

    /// Selector entries in configured order, with `active` marked.
    #[must_use]
    pub fn locale_options(&self, active: &str) -> Vec<LocaleOption> {
        let active = canonicalize(active);
        let mut seen = HashSet::new();
        self.config
            .locales
            .iter()
            .filter(|descriptor| seen.insert(descriptor.canonical_code()))
            .map(|descriptor| {
                let code = descriptor.canonical_code();
                LocaleOption {
                    selected: code == active,
                    label: descriptor.label.clone(),
                    code,
                }
            })
            .collect()
    }

    /// Resolve `href` fully: locale, base, remainder, and document language.
    #[must_use]
    pub fn inspect(&self, href: &str, stored_preference: Option<&str>) -> RouteResolution {
        let ctx = self.context(href);
        let locale = self.resolve_in(&ctx, stored_preference);
        let url_locale = self.url_locale(&ctx);
        let (base_path, remaining_path) = match self.config.locale_source {
            LocaleSource::Path => self.split_remaining(&ctx),
            LocaleSource::Query => match relative_to_base(&ctx.path, &ctx.base_path) {
                Some(remaining) => (ctx.base_path.clone(), remaining),
                None => ("/".to_string(), ctx.path.clone()),
            },
        };
        let document_language = self.document_language(&locale.code);
        RouteResolution {
            locale,
            url_locale,
            base_path,
            remaining_path,
            document_language,
        }
    }
}
