use chrono::NaiveDate;
use serde::Serialize;

/// Marker used for `most_productive_day` when the week has no records.
pub const NO_PRODUCTIVE_DAY: &str = "-";

/// Weekly summary derived from the ledger; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyReport {
    pub week_start_date: NaiveDate,
    pub total_work_hours: f64,
    pub average_efficiency: i64,
    /// Minutes.
    pub total_break_time: i64,
    pub most_productive_day: String,
}

impl WeeklyReport {
    pub fn empty(week_start_date: NaiveDate) -> Self {
        Self {
            week_start_date,
            total_work_hours: 0.0,
            average_efficiency: 0,
            total_break_time: 0,
            most_productive_day: NO_PRODUCTIVE_DAY.to_string(),
        }
    }
}
