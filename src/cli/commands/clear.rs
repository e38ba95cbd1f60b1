use crate::cli::commands::open_tracker;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut tracker = open_tracker(cfg)?;
    tracker.clear_data();
    success("Session and history cleared.");
    Ok(())
}
