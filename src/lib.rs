//! rTimeclock library root.
//! Check-in / break / check-out tracking with encrypted local persistence,
//! a bounded history of finalized days and weekly reporting.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod storage;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing_subscriber::EnvFilter;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cfg),
        Commands::In => cli::commands::checkin::handle(cfg),
        Commands::Break { .. } => cli::commands::breaks::handle(&cli.command, cfg),
        Commands::Out { .. } => cli::commands::checkout::handle(&cli.command, cfg),
        Commands::Status => cli::commands::status::handle(cfg),
        Commands::History { .. } => cli::commands::history::handle(&cli.command, cfg),
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Clear => cli::commands::clear::handle(cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
    }
}

/// `RUST_LOG` wins over the configured level; output goes to stderr.
fn init_logging(cfg: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cfg.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    if let Some(custom_key) = &cli.key_file {
        cfg.key_file = custom_key.clone();
    }

    init_logging(&cfg);
    dispatch(&cli, &cfg)
}
