//! Dictionary fetch and DOM substitution.

use std::collections::HashMap;

use gloo::console;
use gloo::utils::document;
use gloo_net::http::Request;
use sitelang_core::{
    Dictionary, LayeredDictionary, LocaleRouter, SubstitutionTarget, plan_substitutions,
};
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::page::{
    ATTR_RULES_ATTRIBUTE, ElementHooks, HOOK_SELECTOR, TEXT_ATTRIBUTE, collect_bindings,
    dictionary_sources,
};

/// Fetch one dictionary; any failure is logged and yields `None`.
pub async fn fetch_dictionary(url: &str) -> Option<Dictionary> {
    let response = match Request::get(url).send().await {
        Ok(response) => response,
        Err(err) => {
            console::warn!("dictionary request failed", url, err.to_string());
            return None;
        }
    };
    if !response.ok() {
        console::warn!("dictionary unavailable", url, response.status());
        return None;
    }
    let body = match response.text().await {
        Ok(body) => body,
        Err(err) => {
            console::warn!("dictionary body unreadable", url, err.to_string());
            return None;
        }
    };
    match Dictionary::from_json_str(&body) {
        Ok(dictionary) => Some(dictionary),
        Err(err) => {
            console::warn!("dictionary is malformed", url, err.to_string());
            None
        }
    }
}

/// Fetch the layers for `locale` and apply them to the current document.
///
/// Missing layers are skipped; with none loaded the markup is left untouched.
pub async fn translate_page(
    router: LocaleRouter,
    locale: String,
    base_path: String,
    vars: HashMap<String, String>,
) {
    let mut layered = LayeredDictionary::new();
    for (code, url) in dictionary_sources(&router, &locale, &base_path) {
        if let Some(dictionary) = fetch_dictionary(&url).await {
            layered.push(code, dictionary);
        }
    }
    if layered.is_empty() {
        return;
    }

    let elements = hooked_elements();
    let hooks: Vec<ElementHooks> = elements
        .iter()
        .map(|element| ElementHooks {
            text_key: element.get_attribute(TEXT_ATTRIBUTE),
            attr_rules: element.get_attribute(ATTR_RULES_ATTRIBUTE),
        })
        .collect();
    let plan = plan_substitutions(&collect_bindings(&hooks), &layered, &vars);

    let document = document();
    for substitution in plan {
        match substitution.target {
            SubstitutionTarget::Text(index) => {
                if let Some(element) = elements.get(index) {
                    element.set_text_content(Some(&substitution.value));
                }
            }
            SubstitutionTarget::Attribute(index, attribute) => {
                if let Some(element) = elements.get(index) {
                    if element.set_attribute(&attribute, &substitution.value).is_err() {
                        console::warn!("could not set attribute", attribute);
                    }
                }
            }
            SubstitutionTarget::Title => document.set_title(&substitution.value),
            SubstitutionTarget::MetaDescription => {
                if let Ok(Some(meta)) = document.query_selector("meta[name=\"description\"]") {
                    if meta.set_attribute("content", &substitution.value).is_err() {
                        console::warn!("could not set attribute", "content");
                    }
                }
            }
        }
    }
}

fn hooked_elements() -> Vec<Element> {
    let Ok(nodes) = document().query_selector_all(HOOK_SELECTOR) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
