use crate::models::DailyTimeRecord;
use crate::utils::time::{clock_str, format_duration};
use serde::Serialize;

/// Flat row used for CSV export.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct HistoryRow {
    pub date: String,
    pub check_in: String,
    pub check_out: String,
    pub work_time: String,
    pub break_time: String,
    pub breaks: usize,
    pub efficiency: f64,
    pub notes: String,
}

impl From<&DailyTimeRecord> for HistoryRow {
    fn from(r: &DailyTimeRecord) -> Self {
        Self {
            date: r.date_str(),
            check_in: clock_str(&r.check_in_time),
            check_out: r.check_out_time.as_ref().map(clock_str).unwrap_or_default(),
            work_time: format_duration(&r.total_work_time),
            break_time: format_duration(&r.total_break_time),
            breaks: r.breaks.len(),
            efficiency: r.efficiency,
            notes: r.notes.clone().unwrap_or_default(),
        }
    }
}
