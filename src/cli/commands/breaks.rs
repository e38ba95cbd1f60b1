use crate::cli::commands::open_tracker;
use crate::cli::parser::{BreakAction, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::time::{clock_str, format_duration};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Break { action } = cmd {
        let mut tracker = open_tracker(cfg)?;

        match action {
            BreakAction::Start { reason } => {
                let open = tracker.start_break(reason.clone())?;
                let why = open
                    .reason
                    .as_deref()
                    .map(|r| format!(" ({r})"))
                    .unwrap_or_default();
                success(format!("Break started at {}{}.", clock_str(&open.start_time), why));
            }
            BreakAction::End => {
                let closed = tracker.end_break()?;
                success(format!(
                    "Break ended after {}.",
                    format_duration(&closed.duration)
                ));

                if !tracker.validate_break_duration(closed.minutes()) {
                    warning(format!(
                        "Break of {} minutes exceeds the allowed {} minutes.",
                        closed.minutes(),
                        tracker.settings().max_break_minutes
                    ));
                }
            }
        }
    }
    Ok(())
}
