use crate::cli::commands::open_tracker;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use crate::utils::formatting::mins2readable;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { week } = cmd {
        let week_start = match week {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::week_start(date::today()),
        };

        let tracker = open_tracker(cfg)?;
        let report = tracker.weekly_report(week_start);

        println!("📅 Week starting {}", report.week_start_date);
        println!("Total work hours   : {:.2}", report.total_work_hours);
        println!("Average efficiency : {}", report.average_efficiency);
        println!(
            "Total break time   : {} min ({})",
            report.total_break_time,
            mins2readable(report.total_break_time)
        );
        println!("Most productive day: {}", report.most_productive_day);
    }
    Ok(())
}
