use super::{break_record::BreakRecord, duration::WorkDuration};
use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// A finalized working day, created at check-out and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTimeRecord {
    pub date: NaiveDate, // "YYYY-MM-DD"
    pub check_in_time: DateTime<Local>,
    #[serde(default)]
    pub check_out_time: Option<DateTime<Local>>,
    pub total_work_time: WorkDuration,
    pub total_break_time: WorkDuration,
    #[serde(default)]
    pub breaks: Vec<BreakRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub efficiency: f64,
}

impl DailyTimeRecord {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
