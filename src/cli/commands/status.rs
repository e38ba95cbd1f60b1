use crate::cli::commands::open_tracker;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::SessionStatus;
use crate::utils::formatting::bold;
use crate::utils::time::clock_str;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let tracker = open_tracker(cfg)?;
    let state = tracker.current_state();

    println!("Status     : {}", bold(state.status.as_str()));

    if state.status == SessionStatus::CheckedOut {
        return Ok(());
    }

    if let Some(at) = &state.check_in_time {
        println!("Checked in : {}", clock_str(at));
    }
    println!(
        "Worked     : {}",
        tracker.format_time(&tracker.elapsed_work())
    );
    println!(
        "Breaks     : {} ({} closed)",
        tracker.format_time(&state.total_break_time),
        state.breaks.len()
    );

    if let Some(open) = &state.current_break {
        println!("On break   : since {}", clock_str(&open.start_time));
    }
    Ok(())
}
