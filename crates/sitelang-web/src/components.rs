//! Locale selection dropdown.
//!
//! # Design
//! - Presentation only; the selected code is emitted through a callback.
//! - Options arrive pre-ordered with the active locale marked.

use sitelang_core::LocaleOption;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

/// Properties for [`LocaleSelect`].
#[derive(Properties, PartialEq)]
pub struct LocaleSelectProps {
    /// Entries to render, in display order.
    pub options: Vec<LocaleOption>,
    /// Receives the canonical code of the chosen locale.
    pub on_select: Callback<String>,
}

/// `<select>` listing the configured locales.
#[function_component(LocaleSelect)]
pub fn locale_select(props: &LocaleSelectProps) -> Html {
    let on_select = props.on_select.clone();
    let onchange = Callback::from(move |event: Event| {
        if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
            on_select.emit(select.value());
        }
    });

    html! {
        <select class="sitelang-select" aria-label="Language" {onchange}>
            {for props.options.iter().map(|option| html! {
                <option value={option.code.clone()} selected={option.selected}>
                    {option.label.clone()}
                </option>
            })}
        </select>
    }
}
