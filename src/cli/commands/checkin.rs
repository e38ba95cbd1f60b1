use crate::cli::commands::open_tracker;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::time::clock_str;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut tracker = open_tracker(cfg)?;
    let at = tracker.check_in()?;
    success(format!("Checked in at {}.", clock_str(&at)));
    Ok(())
}
