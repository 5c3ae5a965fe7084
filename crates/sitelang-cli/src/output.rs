//! Output renderers and formatting helpers for CLI commands.

use anyhow::anyhow;
use serde::Serialize;
use sitelang_core::{LocaleOrigin, RouteResolution};

use crate::cli::OutputFormat;
use crate::commands::locales::LocaleRow;
use crate::commands::resolve::SwitchReport;
use crate::commands::translate::TranslationReport;
use crate::context::{CliError, CliResult};

fn to_json<T: Serialize + ?Sized>(value: &T) -> CliResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|err| CliError::failure(anyhow!("failed to format JSON: {err}")))
}

pub(crate) fn render_resolution(
    resolution: &RouteResolution,
    format: OutputFormat,
) -> CliResult<String> {
    match format {
        OutputFormat::Json => to_json(resolution),
        OutputFormat::Table => {
            let language = &resolution.document_language;
            Ok([
                format!(
                    "locale: {} ({})",
                    resolution.locale.code,
                    origin_to_str(resolution.locale.origin)
                ),
                format!(
                    "url locale: {}",
                    resolution.url_locale.as_deref().unwrap_or("-")
                ),
                format!("base path: {}", resolution.base_path),
                format!("remaining path: {}", resolution.remaining_path),
                format!(
                    "document lang: {} ({})",
                    language.tag,
                    language.direction.as_str()
                ),
            ]
            .join("\n"))
        }
    }
}

pub(crate) fn render_switch(report: &SwitchReport, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => to_json(report),
        OutputFormat::Table => Ok(format!(
            "{} -> {} [{} -> {}]",
            report.from, report.to, report.current.code, report.locale
        )),
    }
}

pub(crate) fn render_locales(rows: &[LocaleRow], format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => to_json(rows),
        OutputFormat::Table => {
            let mut lines = vec![format!(
                "{:<12} {:<10} {:<4} {:<8} {:<20} FALLBACKS",
                "CODE", "LANG", "DIR", "DEFAULT", "LABEL"
            )];
            for row in rows {
                let fallbacks = if row.fallbacks.is_empty() {
                    "-".to_string()
                } else {
                    row.fallbacks.join(",")
                };
                lines.push(format!(
                    "{:<12} {:<10} {:<4} {:<8} {:<20} {}",
                    row.code,
                    row.document_lang,
                    row.direction,
                    if row.default { "yes" } else { "" },
                    row.label,
                    fallbacks
                ));
            }
            Ok(lines.join("\n"))
        }
    }
}

pub(crate) fn render_translations(
    report: &TranslationReport,
    format: OutputFormat,
) -> CliResult<String> {
    match format {
        OutputFormat::Json => to_json(report),
        OutputFormat::Table => {
            let mut lines = vec![format!("layers: {}", report.layers.join(" > "))];
            for entry in &report.entries {
                lines.push(format!(
                    "{} = {}",
                    entry.key,
                    entry.value.as_deref().unwrap_or("<missing>")
                ));
            }
            Ok(lines.join("\n"))
        }
    }
}

const fn origin_to_str(origin: LocaleOrigin) -> &'static str {
    match origin {
        LocaleOrigin::Url => "url",
        LocaleOrigin::StoredPreference => "stored preference",
        LocaleOrigin::Default => "default",
    }
}
