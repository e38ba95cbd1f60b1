use crate::cli::commands::open_tracker;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::export_history;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let tracker = open_tracker(cfg)?;
        export_history(&tracker.time_history(), *format, Path::new(file), *force)?;
    }
    Ok(())
}
