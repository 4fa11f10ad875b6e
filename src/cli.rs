use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, ValueEnum};
use linepick::MenuOutcome;
use serde_json::json;

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
    CliArgs::parse()
}

#[derive(Parser, Debug)]
#[command(
    name = "linepick",
    version,
    about = "Pick one entry from a list, interactively"
)]
/// Command-line arguments accepted by the `linepick` binary.
pub(crate) struct CliArgs {
    #[arg(
        value_name = "ITEM",
        help = "Menu entries (read from stdin when omitted)"
    )]
    pub(crate) items: Vec<String>,
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "LINEPICK_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        short = 'd',
        long = "default-index",
        value_name = "INDEX",
        help = "Entry highlighted when the menu opens (default: 0)"
    )]
    pub(crate) default_index: Option<usize>,
    #[arg(
        long,
        value_name = "PREFIX",
        help = "Prefix placed before every entry (default: '> ')"
    )]
    pub(crate) prechar: Option<String>,
    #[arg(
        long = "keep-menu",
        help = "Leave the menu on screen after a selection is made"
    )]
    pub(crate) keep_menu: bool,
    #[arg(
        short,
        long,
        value_name = "NAME",
        env = "LINEPICK_THEME",
        help = "Highlight theme for the selected entry"
    )]
    pub(crate) theme: Option<String>,
    #[arg(long = "list-themes", help = "Print available theme names and exit")]
    pub(crate) list_themes: bool,
    #[arg(
        short,
        long,
        value_enum,
        default_value = "plain",
        help = "How to print the outcome"
    )]
    pub(crate) output: OutputFormat,
    #[arg(
        long = "print-config",
        help = "Print the effective configuration before the menu runs"
    )]
    pub(crate) print_config: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    Plain,
    Json,
}

/// Print a plain-text representation of the menu outcome.
pub(crate) fn print_plain(outcome: &MenuOutcome) {
    match &outcome.label {
        Some(label) => println!("{label}"),
        None => println!("No selection"),
    }
}

/// Format the menu outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &MenuOutcome) -> Result<String> {
    let payload = json!({
        "selected": outcome.index.is_some(),
        "index": outcome.index,
        "label": outcome.label,
        "query": outcome.query,
    });

    Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the menu outcome.
pub(crate) fn print_json(outcome: &MenuOutcome) -> Result<()> {
    println!("{}", format_outcome_json(outcome)?);
    Ok(())
}
