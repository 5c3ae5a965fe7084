//! Browser implementations of the router ports and the page entry point.

use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::{document, window};
use sitelang_core::{
    DocumentLanguage, LocaleOption, LocaleRouter, LocaleSwitcher, Navigator, PreferenceStore,
    RenderPort, normalize_base,
};
use wasm_bindgen_futures::spawn_local;
use yew::Callback;

use crate::components::{LocaleSelect, LocaleSelectProps};
use crate::page::{PAGE_CONFIG_ELEMENT_ID, PageConfig, SELECTOR_ROOT_ID, document_attributes};
use crate::translate::translate_page;

/// `localStorage` slot holding the chosen locale.
#[derive(Debug, Clone)]
pub struct LocalPreferences {
    key: String,
}

impl LocalPreferences {
    /// Store under the router's configured key.
    #[must_use]
    pub fn for_router(router: &LocaleRouter) -> Self {
        Self {
            key: router.config().storage_key.clone(),
        }
    }
}

impl PreferenceStore for LocalPreferences {
    fn load(&self) -> Option<String> {
        LocalStorage::get::<String>(&self.key).ok()
    }

    fn store(&mut self, code: &str) {
        if let Err(err) = LocalStorage::set(&self.key, code) {
            console::error!("storage operation failed", "set", self.key.clone(), err.to_string());
        }
    }
}

/// Full-page navigation through `window.location`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationNavigator;

impl Navigator for LocationNavigator {
    fn navigate(&mut self, href: &str) {
        if let Err(err) = window().location().assign(href) {
            console::error!("navigation failed", href, err);
        }
    }
}

/// Writes `lang`/`dir` on `<html>` and mounts the selector component.
#[derive(Debug, Clone)]
pub struct DocumentRenderer {
    router: LocaleRouter,
}

impl DocumentRenderer {
    /// Renderer whose selector switches through `router`.
    #[must_use]
    pub const fn new(router: LocaleRouter) -> Self {
        Self { router }
    }
}

impl RenderPort for DocumentRenderer {
    fn set_document_language(&mut self, language: &DocumentLanguage) {
        let Some(root) = document().document_element() else {
            return;
        };
        for (attribute, value) in document_attributes(language) {
            if root.set_attribute(attribute, value).is_err() {
                console::warn!("could not set attribute", attribute);
            }
        }
    }

    fn render_locale_options(&mut self, options: &[LocaleOption]) {
        let Some(root) = document().get_element_by_id(SELECTOR_ROOT_ID) else {
            return;
        };
        let router = self.router.clone();
        let props = LocaleSelectProps {
            options: options.to_vec(),
            on_select: Callback::from(move |code: String| select_locale(&router, &code)),
        };
        yew::Renderer::<LocaleSelect>::with_root_and_props(root, props).render();
    }
}

type BrowserSwitcher = LocaleSwitcher<DocumentRenderer, LocalPreferences, LocationNavigator>;

fn switcher(router: LocaleRouter) -> BrowserSwitcher {
    let renderer = DocumentRenderer::new(router.clone());
    let store = LocalPreferences::for_router(&router);
    LocaleSwitcher::new(router, renderer, store, LocationNavigator)
}

fn current_href() -> String {
    window().location().href().unwrap_or_else(|_| "/".to_string())
}

fn select_locale(router: &LocaleRouter, code: &str) {
    let mut switcher = switcher(router.clone());
    let _ = switcher.on_select(&current_href(), code);
}

fn declared_base_href() -> Option<String> {
    document()
        .query_selector("base[href]")
        .ok()
        .flatten()
        .and_then(|base| base.get_attribute("href"))
}

fn read_page_config() -> Option<PageConfig> {
    let raw = document()
        .get_element_by_id(PAGE_CONFIG_ELEMENT_ID)?
        .text_content()?;
    match PageConfig::from_json(&raw, declared_base_href().as_deref()) {
        Ok(page) => Some(page),
        Err(err) => {
            console::error!("sitelang: invalid page configuration", err.to_string());
            None
        }
    }
}

/// Resolve the page locale, render the selector, and translate the document.
pub fn run_page() {
    console_error_panic_hook::set_once();

    let Some(page) = read_page_config() else {
        console::error!("sitelang: page configuration missing");
        return;
    };
    let router = match LocaleRouter::new(page.router) {
        Ok(router) => router,
        Err(err) => {
            console::error!("sitelang: router configuration rejected", err.to_string());
            return;
        }
    };

    let href = current_href();
    let resolved = switcher(router.clone()).on_page_load(&href);
    let base_path = router
        .config()
        .base_path
        .as_deref()
        .map_or_else(|| router.context(&href).base_path, normalize_base);
    spawn_local(translate_page(router, resolved.code, base_path, page.vars));
}
