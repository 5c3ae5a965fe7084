//! Argument parsing and command dispatch.

use std::env;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use sitelang_config::defaults::{DEFAULT_LANGUAGES_FILE, DEFAULT_LOCALES_DIR};
use sitelang_telemetry::{LogFormat, LoggingConfig, init_logging};

use crate::commands::locales::handle_locales;
use crate::commands::resolve::{handle_resolve, handle_switch};
use crate::commands::translate::handle_translate;
use crate::context::{AppContext, CliError, CliResult};

#[derive(Parser)]
#[command(name = "sitelang", about = "Inspect locale routing for a static multi-locale site")]
pub(crate) struct Cli {
    #[arg(
        long,
        global = true,
        env = "SITELANG_LANGUAGES_FILE",
        default_value = DEFAULT_LANGUAGES_FILE,
        help = "Path to languages.json"
    )]
    pub(crate) languages: PathBuf,
    #[arg(
        long = "output",
        alias = "format",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Table,
        help = "Select output format for commands that render structured data"
    )]
    pub(crate) output: OutputFormat,
    #[arg(
        long,
        global = true,
        env = "SITELANG_LOG_LEVEL",
        default_value = "warn",
        help = "Log level used when RUST_LOG is unset"
    )]
    pub(crate) log_level: String,
    #[arg(long, global = true, env = "SITELANG_LOG_FORMAT", help = "json or pretty")]
    pub(crate) log_format: Option<String>,
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Show the active locale, base path, and remaining path for an href.
    Resolve(ResolveArgs),
    /// Compute the href that shows the same page in another locale.
    Switch(SwitchArgs),
    /// List configured locales.
    Locales,
    /// Look up dictionary keys with fallbacks applied.
    Translate(TranslateArgs),
}

#[derive(Args)]
pub(crate) struct ResolveArgs {
    /// Current page href (path or absolute URL).
    pub(crate) href: String,
    #[arg(long, help = "Previously stored locale preference")]
    pub(crate) stored: Option<String>,
}

#[derive(Args)]
pub(crate) struct SwitchArgs {
    /// Current page href (path or absolute URL).
    pub(crate) href: String,
    /// Locale to switch to.
    pub(crate) locale: String,
    #[arg(long, help = "Previously stored locale preference")]
    pub(crate) stored: Option<String>,
}

#[derive(Args)]
pub(crate) struct TranslateArgs {
    /// Locale whose dictionary is consulted first.
    pub(crate) locale: String,
    /// Dictionary keys to look up.
    #[arg(required = true)]
    pub(crate) keys: Vec<String>,
    #[arg(
        long,
        env = "SITELANG_LOCALES_DIR",
        default_value = DEFAULT_LOCALES_DIR,
        help = "Directory holding <locale>.json dictionaries"
    )]
    pub(crate) locales_dir: PathBuf,
    #[arg(long = "var", value_name = "NAME=VALUE", help = "Placeholder value; repeatable")]
    pub(crate) vars: Vec<String>,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Parses CLI arguments, executes the requested command, and prints its
/// output. Returns the process exit code.
#[must_use]
pub fn run() -> i32 {
    let cli = Cli::parse();

    let logging = LoggingConfig {
        level: &cli.log_level,
        format: cli
            .log_format
            .as_deref()
            .map_or_else(LogFormat::infer, LogFormat::from_name),
        ..LoggingConfig::default()
    };
    if let Err(err) = init_logging(&logging) {
        let err = CliError::failure(err);
        eprintln!("error: {}", err.display_message());
        return err.exit_code();
    }

    match dispatch(cli, |name| env::var(name).ok()) {
        Ok(output) => {
            println!("{output}");
            0
        }
        Err(err) => {
            eprintln!("error: {}", err.display_message());
            err.exit_code()
        }
    }
}

pub(crate) fn dispatch<F>(cli: Cli, lookup: F) -> CliResult<String>
where
    F: Fn(&str) -> Option<String>,
{
    let ctx = AppContext::load(&cli.languages, lookup)?;

    match cli.command {
        Command::Resolve(args) => handle_resolve(&ctx, &args, cli.output),
        Command::Switch(args) => handle_switch(&ctx, &args, cli.output),
        Command::Locales => handle_locales(&ctx, cli.output),
        Command::Translate(args) => handle_translate(&ctx, &args, cli.output),
    }
}
