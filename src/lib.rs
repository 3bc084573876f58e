//! shiftclock library root.
//! Exposes the derivation core (classifier, expander, assembler, clock
//! geometry), the configuration model, exporters and the CLI.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::{Path, PathBuf};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(&cli.command, config_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, config_path),
        Commands::Classify => cli::commands::classify::handle(&cli.command, config_path),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, config_path),
        Commands::Clock { .. } => cli::commands::clock::handle(&cli.command, config_path),
        Commands::Now { .. } => cli::commands::now::handle(&cli.command, config_path),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, config_path),
    }
}

/// `--config` if given, otherwise the platform default.
pub fn resolve_config_path(cli: &Cli) -> PathBuf {
    match &cli.config {
        Some(p) => utils::path::expand_tilde(p),
        None => Config::config_file(),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let config_path = resolve_config_path(&cli);
    dispatch(&cli, &config_path)
}
