#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links, rustdoc::bare_urls)]
#![warn(
    missing_docs,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(clippy::module_name_repetitions)]

//! Locale routing for static, multi-locale websites.
//!
//! The router detects the active locale from a URL, strips it, and rebuilds the
//! URL for another locale while keeping the rest of the path, the query, and the
//! fragment. Everything here is a pure function over strings; browser effects
//! sit behind the ports in [`switcher`].
//!
//! Layout:
//! - `locale.rs`: canonical codes, descriptors, the supported set, document language tags
//! - `path.rs`: slash normalization plus detect/strip/rebuild of locale path segments
//! - `query.rs`: the `?lang=` routing variant
//! - `context.rs`: href parsing into a [`RoutingContext`]
//! - `resolve.rs`: precedence between URL, stored preference, and default
//! - `router.rs`: [`LocaleRouter`] and its configuration flags
//! - `switcher.rs`: rendering/storage/navigation ports and the page-load/selection flow
//! - `dictionary.rs`: layered translation dictionaries and DOM substitution planning

pub mod context;
pub mod dictionary;
pub mod error;
pub mod locale;
pub mod path;
pub mod query;
pub mod resolve;
pub mod router;
pub mod switcher;

pub use context::RoutingContext;
pub use dictionary::{
    Binding, DESCRIPTION_KEY, Dictionary, LayeredDictionary, Substitution, SubstitutionTarget,
    TITLE_KEY, dictionary_path, format_vars, parse_attr_rules, plan_substitutions,
};
pub use error::{DictionaryError, RouterError};
pub use locale::{
    DocumentLanguage, LocaleDescriptor, SupportedLocales, TextDirection, bcp47_case, canonicalize,
    supported_set,
};
pub use path::{
    MAX_SCANNED_SEGMENTS, build_target_url, collapse_slashes, detect_locale_from_path,
    infer_base_path, normalize_base, normalize_path, relative_to_base, strip_locale_from_path,
};
pub use query::{DEFAULT_QUERY_PARAM, detect_locale_from_query, set_locale_in_query};
pub use resolve::{LocaleOrigin, Precedence, ResolvedLocale, resolve_current_locale};
pub use router::{
    DEFAULT_STORAGE_KEY, LocaleOption, LocaleRouter, LocaleSource, Placement, RouteResolution,
    RouterConfig,
};
pub use switcher::{LocaleSwitcher, Navigator, PreferenceStore, RenderPort};
