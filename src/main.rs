//! Tola Index - Markdown front matter extractor and search indexer.

mod cli;
mod config;
mod logger;
mod page;
mod search;
mod utils;

use anyhow::Result;
use clap::ColorChoice;
use cli::{Cli, Commands};
use config::IndexConfig;

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = IndexConfig::load(&cli)?;

    match cli.command_or_default() {
        Commands::Index { args } => cli::index::run_index(&args, &config),
        Commands::Query { args } => cli::query::run_query(&args, &config),
    }
}
