//! Page-load and selection flow over injected browser ports.
//!
//! # Design
//! - The router stays DOM-free; rendering, persistence, and navigation are traits.
//! - Page load: resolve, set the document language, render the selector.
//! - Selection: coerce, optionally persist, set the document language, navigate.

use tracing::info;

use crate::locale::DocumentLanguage;
use crate::resolve::ResolvedLocale;
use crate::router::{LocaleOption, LocaleRouter};

/// Rendering side of the document.
pub trait RenderPort {
    /// Write the document `lang` (and `dir`) attributes.
    fn set_document_language(&mut self, language: &DocumentLanguage);

    /// Render the locale selector entries.
    fn render_locale_options(&mut self, options: &[LocaleOption]);
}

/// Durable per-browser storage for the last chosen locale.
pub trait PreferenceStore {
    /// Previously stored locale code, if any.
    fn load(&self) -> Option<String>;

    /// Remember `code` as the chosen locale.
    fn store(&mut self, code: &str);
}

/// Full-page navigation.
pub trait Navigator {
    /// Navigate to `href`.
    fn navigate(&mut self, href: &str);
}

/// Router plus the ports it drives.
#[derive(Debug)]
pub struct LocaleSwitcher<R, S, N> {
    router: LocaleRouter,
    renderer: R,
    store: S,
    navigator: N,
}

impl<R, S, N> LocaleSwitcher<R, S, N>
where
    R: RenderPort,
    S: PreferenceStore,
    N: Navigator,
{
    /// Wire the router to its ports.
    pub const fn new(router: LocaleRouter, renderer: R, store: S, navigator: N) -> Self {
        Self {
            router,
            renderer,
            store,
            navigator,
        }
    }

    /// Router driving this switcher.
    pub const fn router(&self) -> &LocaleRouter {
        &self.router
    }

    /// Rendering port.
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Preference store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Navigation port.
    pub const fn navigator(&self) -> &N {
        &self.navigator
    }

    fn stored_preference(&self) -> Option<String> {
        if self.router.config().persist_preference {
            self.store.load()
        } else {
            None
        }
    }

    /// Resolve the active locale for `href` and render it.
    pub fn on_page_load(&mut self, href: &str) -> ResolvedLocale {
        let stored = self.stored_preference();
        let resolved = self.router.current_locale(href, stored.as_deref());
        let language = self.router.document_language(&resolved.code);
        self.renderer.set_document_language(&language);
        let options = self.router.locale_options(&resolved.code);
        self.renderer.render_locale_options(&options);
        resolved
    }

    /// Switch to `selection` from `href`; returns the href navigated to.
    pub fn on_select(&mut self, href: &str, selection: &str) -> String {
        let code = self.router.coerce_selection(selection);
        if self.router.config().persist_preference {
            self.store.store(&code);
        }
        let language = self.router.document_language(&code);
        self.renderer.set_document_language(&language);

        let target = self.router.switch_href(href, &code);
        info!(locale = %code, target = %target, "switching locale");
        self.navigator.navigate(&target);
        target
    }
}
