//! Configuration loading for the `linepick` binary.
//!
//! Defaults are layered the usual way: built-in values, then the default
//! config file locations, then any `--config` files, then `LINEPICK__`
//! environment variables, then explicit CLI flags.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, File};
use directories::ProjectDirs;
use serde::Deserialize;

use crate::cli::CliArgs;

/// Settings as they appear in configuration files, everything optional.
#[derive(Debug, Default, Deserialize)]
struct RawSettings {
    prechar: Option<String>,
    clear_on_exit: Option<bool>,
    default_index: Option<usize>,
    theme: Option<String>,
}

/// Application-ready configuration derived from CLI flags, config files and
/// built-in defaults.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ResolvedConfig {
    pub(crate) prechar: String,
    pub(crate) clear_on_exit: bool,
    pub(crate) default_index: usize,
    pub(crate) theme: Option<String>,
}

impl ResolvedConfig {
    /// Print a human readable summary of the effective configuration.
    pub(crate) fn print_summary(&self) {
        println!("Effective configuration:");
        println!("  Prechar: {:?}", self.prechar);
        println!("  Clear on exit: {}", bool_to_word(self.clear_on_exit));
        println!("  Default index: {}", self.default_index);
        println!(
            "  Theme: {}",
            self.theme.as_deref().unwrap_or("(library default)")
        );
    }
}

/// Load and resolve the configuration for this invocation.
pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
    let raw: RawSettings = build_config(cli)?
        .try_deserialize()
        .context("invalid configuration")?;
    Ok(resolve(raw, cli))
}

fn resolve(raw: RawSettings, cli: &CliArgs) -> ResolvedConfig {
    ResolvedConfig {
        prechar: cli
            .prechar
            .clone()
            .or(raw.prechar)
            .unwrap_or_else(|| "> ".to_string()),
        clear_on_exit: if cli.keep_menu {
            false
        } else {
            raw.clear_on_exit.unwrap_or(true)
        },
        default_index: cli.default_index.or(raw.default_index).unwrap_or(0),
        theme: cli.theme.clone().or(raw.theme),
    }
}

/// Build a [`Config`] instance by combining default locations with CLI overrides.
fn build_config(cli: &CliArgs) -> Result<Config> {
    let mut builder = Config::builder();

    if !cli.no_config {
        for path in default_config_files() {
            builder = builder.add_source(File::from(path).required(false));
        }
    }

    for path in &cli.config {
        builder = builder.add_source(File::from(path.clone()).required(true));
    }

    builder = builder.add_source(
        config::Environment::with_prefix("linepick")
            .separator("__")
            .try_parsing(true),
    );

    Ok(builder.build()?)
}

/// Discover the default configuration file locations that should be consulted.
fn default_config_files() -> Vec<PathBuf> {
    let mut files = Vec::new();

    if let Some(dirs) = ProjectDirs::from("", "", "linepick") {
        files.push(dirs.config_dir().join("config.toml"));
    }

    if let Ok(current_dir) = env::current_dir() {
        files.push(current_dir.join(".linepick.toml"));
        files.push(current_dir.join("linepick.toml"));
    }

    files
}

fn bool_to_word(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
