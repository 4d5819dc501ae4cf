//! Folio - content metrics and display helpers for a portfolio blog.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use folio::cli::{self, Cli};
use folio::config::FolioConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    folio::logger::set_verbose(cli.verbose);

    // Pure formatting commands never touch folio.toml
    let config = if cli.command.needs_config() {
        FolioConfig::load(&cli)?
    } else {
        FolioConfig::default()
    };
    cli::run(&cli, &config)
}
