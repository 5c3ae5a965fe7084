use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Serialize;
use sitelang_core::{Dictionary, LayeredDictionary, format_vars};
use tracing::warn;

use crate::cli::{OutputFormat, TranslateArgs};
use crate::context::{AppContext, CliError, CliResult};
use crate::output::render_translations;

/// One looked-up key; `value` is `None` when no layer has it.
#[derive(Debug, Serialize)]
pub(crate) struct TranslationEntry {
    pub(crate) key: String,
    pub(crate) value: Option<String>,
}

/// Result of a `translate` command.
#[derive(Debug, Serialize)]
pub(crate) struct TranslationReport {
    pub(crate) locale: String,
    pub(crate) layers: Vec<String>,
    pub(crate) entries: Vec<TranslationEntry>,
}

pub(crate) fn handle_translate(
    ctx: &AppContext,
    args: &TranslateArgs,
    format: OutputFormat,
) -> CliResult<String> {
    let router = &ctx.router;
    let locale = router
        .supported()
        .match_code(&args.locale)
        .ok_or_else(|| CliError::validation(format!("unsupported locale: {}", args.locale)))?;
    let vars = parse_vars(&args.vars)?;

    let fallbacks = router
        .descriptor(&locale)
        .map(|descriptor| descriptor.fallbacks.clone())
        .unwrap_or_default();
    let chain = LayeredDictionary::chain(&locale, &fallbacks, router.default_locale());
    let dictionary =
        LayeredDictionary::load(&chain, |code| read_dictionary(&args.locales_dir, code));

    let report = TranslationReport {
        layers: dictionary.locales().map(str::to_string).collect(),
        entries: args
            .keys
            .iter()
            .map(|key| TranslationEntry {
                key: key.clone(),
                value: dictionary.lookup(key).map(|text| format_vars(&text, &vars)),
            })
            .collect(),
        locale,
    };
    render_translations(&report, format)
}

fn read_dictionary(dir: &Path, code: &str) -> Option<Dictionary> {
    let path = dir.join(format!("{code}.json"));
    let raw = fs::read_to_string(&path).ok()?;
    match Dictionary::from_json_str(&raw) {
        Ok(dictionary) => Some(dictionary),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "ignoring malformed dictionary");
            None
        }
    }
}

fn parse_vars(raw: &[String]) -> CliResult<HashMap<String, String>> {
    raw.iter()
        .map(|pair| {
            let (name, value) = pair
                .split_once('=')
                .ok_or_else(|| CliError::validation(format!("expected NAME=VALUE, got {pair}")))?;
            let name = name.trim();
            if name.is_empty() {
                return Err(CliError::validation(format!("empty variable name in {pair}")));
            }
            Ok((name.to_string(), value.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vars_require_name_and_equals() {
        let vars = parse_vars(&["year=2026".to_string(), " company =Acme=Co".to_string()])
            .expect("valid vars");
        assert_eq!(vars.get("year").map(String::as_str), Some("2026"));
        assert_eq!(vars.get("company").map(String::as_str), Some("Acme=Co"));

        assert!(parse_vars(&["year".to_string()]).is_err());
        assert!(parse_vars(&["=x".to_string()]).is_err());
    }

    #[test]
    fn malformed_dictionary_files_are_skipped() {
        let site = sitelang_test_support::fixtures::SiteFixture::new().expect("fixture");
        site.write_dictionary("en", "[not an object]").expect("dictionary");
        assert!(read_dictionary(&site.locales_dir(), "en").is_none());
        assert!(read_dictionary(&site.locales_dir(), "fr").is_none());
    }
}
