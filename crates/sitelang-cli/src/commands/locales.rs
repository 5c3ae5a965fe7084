use serde::Serialize;

use crate::cli::OutputFormat;
use crate::context::{AppContext, CliResult};
use crate::output::render_locales;

/// One configured locale as listed by `locales`.
#[derive(Debug, Serialize)]
pub(crate) struct LocaleRow {
    pub(crate) code: String,
    pub(crate) label: String,
    pub(crate) document_lang: String,
    pub(crate) direction: &'static str,
    pub(crate) default: bool,
    pub(crate) fallbacks: Vec<String>,
}

pub(crate) fn handle_locales(ctx: &AppContext, format: OutputFormat) -> CliResult<String> {
    let router = &ctx.router;
    let rows: Vec<LocaleRow> = router
        .config()
        .locales
        .iter()
        .map(|descriptor| {
            let language = descriptor.document_language();
            let code = descriptor.canonical_code();
            LocaleRow {
                default: code == router.default_locale(),
                code,
                label: descriptor.label.clone(),
                document_lang: language.tag,
                direction: language.direction.as_str(),
                fallbacks: descriptor.fallbacks.clone(),
            }
        })
        .collect();
    render_locales(&rows, format)
}
