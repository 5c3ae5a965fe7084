//! In-memory implementations of the switcher ports.

use sitelang_core::{DocumentLanguage, LocaleOption, Navigator, PreferenceStore, RenderPort};

/// Renderer that records everything written to it.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    /// Every document language set, oldest first.
    pub languages: Vec<DocumentLanguage>,
    /// Most recently rendered selector entries.
    pub options: Vec<LocaleOption>,
    /// Number of selector renders.
    pub renders: usize,
}

impl RecordingRenderer {
    /// Last document language written, if any.
    #[must_use]
    pub fn current_language(&self) -> Option<&DocumentLanguage> {
        self.languages.last()
    }

    /// Code of the selected option in the last render.
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.options
            .iter()
            .find(|option| option.selected)
            .map(|option| option.code.as_str())
    }
}

impl RenderPort for RecordingRenderer {
    fn set_document_language(&mut self, language: &DocumentLanguage) {
        self.languages.push(language.clone());
    }

    fn render_locale_options(&mut self, options: &[LocaleOption]) {
        self.options = options.to_vec();
        self.renders += 1;
    }
}

/// Preference store backed by a single slot.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    value: Option<String>,
    writes: usize,
}

impl MemoryPreferences {
    /// Store pre-seeded with `code`.
    #[must_use]
    pub fn seeded(code: impl Into<String>) -> Self {
        Self {
            value: Some(code.into()),
            writes: 0,
        }
    }

    /// Currently stored code.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Number of writes received.
    #[must_use]
    pub const fn writes(&self) -> usize {
        self.writes
    }
}

impl PreferenceStore for MemoryPreferences {
    fn load(&self) -> Option<String> {
        self.value.clone()
    }

    fn store(&mut self, code: &str) {
        self.value = Some(code.to_string());
        self.writes += 1;
    }
}

/// Navigator that records destinations instead of leaving the page.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    /// Every href navigated to, oldest first.
    pub visited: Vec<String>,
}

impl RecordingNavigator {
    /// Last destination, if any.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.visited.last().map(String::as_str)
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, href: &str) {
        self.visited.push(href.to_string());
    }
}
