//! sitenav - navigation configuration model for static documentation sites.
//!
//! Parses a declarative `sitenav.toml` (site metadata, top nav, path-scoped
//! sidebars, social links), validates it, and emits the configuration object
//! the rendering generator consumes. An invalid declaration fails the build
//! before the generator starts.

#![allow(dead_code)]

mod cli;
mod config;
mod generator;
mod logger;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::NavConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    // Fail fast: any validation error aborts here with the aggregated
    // report, before a command (or the generator) sees the configuration.
    let config = NavConfig::load(&cli.config)?;

    match &cli.command {
        Commands::Check => cli::check::run_check(&config),
        Commands::Emit { pretty, output } => {
            cli::emit::run_emit(&config, *pretty, output.as_deref())
        }
        Commands::Resolve { path } => cli::resolve::run_resolve(&config, path),
    }
}
