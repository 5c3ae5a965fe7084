//! Descriptor sets and on-disk fixtures.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::{Value, json};
use sitelang_core::{LocaleDescriptor, RouterConfig};
use tempfile::TempDir;

/// Default locale of [`standard_locales`].
pub const STANDARD_DEFAULT: &str = "zh-hans";

/// The eight-locale set used throughout the suites, in display order.
#[must_use]
pub fn standard_locales() -> Vec<LocaleDescriptor> {
    vec![
        LocaleDescriptor::new("zh-hans", "简体中文").with_external_code("zh-CN"),
        LocaleDescriptor::new("zh-hant", "繁體中文").with_fallbacks(["zh-hans"]),
        LocaleDescriptor::new("en", "English"),
        LocaleDescriptor::new("ja", "日本語"),
        LocaleDescriptor::new("ko", "한국어"),
        LocaleDescriptor::new("fr", "Français"),
        LocaleDescriptor::new("de", "Deutsch"),
        LocaleDescriptor::new("ar", "العربية").with_rtl(true),
    ]
}

/// Path-routed configuration over [`standard_locales`].
#[must_use]
pub fn standard_config() -> RouterConfig {
    RouterConfig::new(standard_locales(), STANDARD_DEFAULT)
}

/// `languages.json` document mirroring [`standard_locales`].
#[must_use]
pub fn standard_languages_json() -> Value {
    json!([
        { "code": "zh-hans", "name": "简体中文", "htmlLang": "zh-CN" },
        { "code": "zh-hant", "name": "繁體中文", "fallbacks": ["zh-hans"] },
        { "code": "en", "name": "English" },
        { "code": "ja", "name": "日本語" },
        { "code": "ko", "name": "한국어" },
        { "code": "fr", "name": "Français" },
        { "code": "de", "name": "Deutsch" },
        { "code": "ar", "name": "العربية", "rtl": true }
    ])
}

/// Temporary site directory holding a languages file and locale dictionaries.
#[derive(Debug)]
pub struct SiteFixture {
    dir: TempDir,
}

impl SiteFixture {
    /// Create an empty site directory.
    ///
    /// # Errors
    ///
    /// Returns an error when the temporary directory cannot be created.
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("failed to create site fixture directory")?;
        Ok(Self { dir })
    }

    /// Root of the fixture.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Directory that holds `<locale>.json` dictionaries.
    #[must_use]
    pub fn locales_dir(&self) -> PathBuf {
        self.root().join("locales")
    }

    /// Write `contents` verbatim to `languages.json` and return its path.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be written.
    pub fn write_languages_raw(&self, contents: &str) -> Result<PathBuf> {
        let path = self.root().join("languages.json");
        fs::write(&path, contents)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(path)
    }

    /// Write `document` as `languages.json` and return its path.
    ///
    /// # Errors
    ///
    /// Returns an error when serialization or the write fails.
    pub fn write_languages(&self, document: &Value) -> Result<PathBuf> {
        let raw = serde_json::to_string_pretty(document).context("failed to encode languages")?;
        self.write_languages_raw(&raw)
    }

    /// Write a dictionary for `locale` under [`Self::locales_dir`].
    ///
    /// # Errors
    ///
    /// Returns an error when the directory or file cannot be written.
    pub fn write_dictionary(&self, locale: &str, contents: &str) -> Result<PathBuf> {
        let dir = self.locales_dir();
        fs::create_dir_all(&dir).with_context(|| format!("failed to create {}", dir.display()))?;
        let path = dir.join(format!("{locale}.json"));
        fs::write(&path, contents)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(path)
    }
}
