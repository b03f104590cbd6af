//! rTimesheet library root.
//! Exposes the CLI parser, the high-level run() function and the
//! classification / aggregation pipeline behind it.

pub mod cli;
pub mod config;
pub mod context;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod source;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};
use std::path::{Path, PathBuf};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(&cli.command, cfg, config_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
        Commands::Week { .. } | Commands::ThisWeek { .. } | Commands::LastWeek { .. } => {
            cli::commands::week::handle(&cli.command, cfg)
        }
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Range { .. } => cli::commands::range::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ diagnostics on stderr, debug level only with --verbose
    init_logging(cli.verbose);

    // 3️⃣ load config once
    let config_path = resolve_config_path(&cli);
    let mut cfg = Config::load(&config_path)?;

    // 4️⃣ command-line overrides for this run only
    apply_overrides(&cli, &mut cfg);

    dispatch(&cli, &cfg, &config_path)
}

pub fn resolve_config_path(cli: &Cli) -> PathBuf {
    match &cli.config {
        Some(p) => utils::path::expand_tilde(p),
        None => Config::config_file(),
    }
}

pub fn apply_overrides(cli: &Cli, cfg: &mut Config) {
    if let Some(projects) = &cli.projects {
        cfg.projects_file = projects.clone();
    }
    if let Some(calendar) = &cli.calendar {
        cfg.calendar_file = calendar.clone();
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    // a logger may already be installed when embedded; keep that one
    let _ = TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}
