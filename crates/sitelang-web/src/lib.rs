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

//! Browser adapter for the locale router.
//!
//! `page.rs` holds the DOM-free pieces (page configuration, binding
//! collection, dictionary URLs) and builds on every target. The wasm32-only
//! modules bind the router ports to `localStorage`, the document, and
//! `window.location`, and mount the locale selector.

pub mod page;

#[cfg(target_arch = "wasm32")]
pub mod browser;
#[cfg(target_arch = "wasm32")]
pub mod components;
#[cfg(target_arch = "wasm32")]
pub mod translate;

#[cfg(target_arch = "wasm32")]
pub use browser::run_page;
