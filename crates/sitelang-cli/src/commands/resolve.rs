use serde::Serialize;
use sitelang_core::ResolvedLocale;

use crate::cli::{OutputFormat, ResolveArgs, SwitchArgs};
use crate::context::{AppContext, CliResult};
use crate::output::{render_resolution, render_switch};

/// Result of a `switch` command.
#[derive(Debug, Serialize)]
pub(crate) struct SwitchReport {
    pub(crate) from: String,
    pub(crate) to: String,
    pub(crate) current: ResolvedLocale,
    pub(crate) locale: String,
}

pub(crate) fn handle_resolve(
    ctx: &AppContext,
    args: &ResolveArgs,
    format: OutputFormat,
) -> CliResult<String> {
    let resolution = ctx.router.inspect(&args.href, args.stored.as_deref());
    render_resolution(&resolution, format)
}

pub(crate) fn handle_switch(
    ctx: &AppContext,
    args: &SwitchArgs,
    format: OutputFormat,
) -> CliResult<String> {
    let current = ctx.router.current_locale(&args.href, args.stored.as_deref());
    let locale = ctx.router.coerce_selection(&args.locale);
    let to = ctx.router.switch_href(&args.href, &locale);
    let report = SwitchReport {
        from: args.href.clone(),
        to,
        current,
        locale,
    };
    render_switch(&report, format)
}
