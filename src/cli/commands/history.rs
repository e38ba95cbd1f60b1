use crate::cli::commands::open_tracker;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::HistoryRow;
use crate::ui::messages::info;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History { limit } = cmd {
        let tracker = open_tracker(cfg)?;
        let records = tracker.time_history();

        if records.is_empty() {
            info("No recorded days yet.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("DATE", 10),
            Column::new("IN", 8),
            Column::new("OUT", 8),
            Column::new("WORKED", 8),
            Column::new("BREAKS", 8),
            Column::new("EFF", 5),
            Column::new("NOTES", 5),
        ]);

        let shown = limit.unwrap_or(records.len());
        for record in records.iter().take(shown) {
            let row = HistoryRow::from(record);
            table.add_row(vec![
                row.date,
                row.check_in,
                row.check_out,
                row.work_time,
                row.break_time,
                format!("{}", row.efficiency),
                row.notes,
            ]);
        }

        print!("{}", table.render());
    }
    Ok(())
}
