#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links, rustdoc::bare_urls)]
#![warn(
    missing_docs,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]

//! File- and environment-backed configuration for the locale router.
//!
//! Layout: `model.rs` (raw `languages.json` entries and router settings),
//! `validate.rs` (parsing helpers for setting values), `defaults.rs` (env names
//! and fallback values), `loader.rs` (reading and assembling a [`RouterConfig`]).
//!
//! [`RouterConfig`]: sitelang_core::RouterConfig

pub mod defaults;
pub mod error;
pub mod loader;
pub mod model;
pub mod validate;

pub use error::{ConfigError, ConfigResult};
pub use loader::{
    build_router_config, load_languages, load_router, load_router_config, parse_languages,
    settings_from_env,
};
pub use model::{LanguageEntry, RouterSettings};
