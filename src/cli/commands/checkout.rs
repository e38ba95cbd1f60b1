use crate::cli::commands::open_tracker;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::time::{clock_str, format_duration};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Out { efficiency, notes } = cmd {
        let mut tracker = open_tracker(cfg)?;
        let record = tracker.check_out(*efficiency, notes.clone())?;

        let out = record
            .check_out_time
            .as_ref()
            .map(clock_str)
            .unwrap_or_default();
        success(format!(
            "Checked out at {}: worked {}, breaks {}.",
            out,
            format_duration(&record.total_work_time),
            format_duration(&record.total_break_time)
        ));
    }
    Ok(())
}
