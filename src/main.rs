mod cli;
mod settings;

use std::io::{self, BufRead};

use anyhow::{Context, Result, bail};
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use linepick::{Menu, theme};
use settings::ResolvedConfig;

fn main() -> Result<()> {
    let cli = parse_cli();

    if cli.list_themes {
        for name in theme::names() {
            println!("{name}");
        }
        return Ok(());
    }

    let resolved = settings::load(&cli)?;

    if cli.print_config {
        resolved.print_summary();
    }

    let items = gather_items(&cli)?;
    run_menu(cli.output, items, resolved)
}

/// Menu entries come from the positional arguments, or from stdin lines when
/// none were given.
fn gather_items(cli: &cli::CliArgs) -> Result<Vec<String>> {
    if !cli.items.is_empty() {
        return Ok(cli.items.clone());
    }

    let stdin = io::stdin();
    let mut items = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.context("reading menu entries from stdin")?;
        if !line.is_empty() {
            items.push(line);
        }
    }
    Ok(items)
}

/// Build the menu from the resolved settings, run it and print the outcome
/// in the chosen format.
fn run_menu(format: OutputFormat, items: Vec<String>, settings: ResolvedConfig) -> Result<()> {
    let ResolvedConfig {
        prechar,
        clear_on_exit,
        default_index,
        theme: theme_name,
    } = settings;

    let mut menu = Menu::new(items)
        .with_prechar(prechar)
        .with_clear_on_exit(clear_on_exit)
        .with_default_index(default_index);

    if let Some(name) = theme_name {
        match theme::by_name(&name) {
            Some(theme) => menu = menu.with_theme(theme),
            None => bail!(
                "unknown theme '{name}' (try --list-themes for the available names)"
            ),
        }
    }

    let outcome = menu.run()?;

    match format {
        OutputFormat::Plain => print_plain(&outcome),
        OutputFormat::Json => print_json(&outcome)?,
    }

    Ok(())
}
