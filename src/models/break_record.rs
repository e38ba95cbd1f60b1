use super::duration::WorkDuration;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One break inside a session. `end_time == None` means the break is still open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakRecord {
    pub start_time: DateTime<Local>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Local>>,
    pub duration: WorkDuration,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved: Option<bool>,
}

impl BreakRecord {
    pub fn open(start_time: DateTime<Local>, reason: Option<String>) -> Self {
        Self {
            start_time,
            end_time: None,
            duration: WorkDuration::ZERO,
            reason,
            approved: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.end_time.is_none()
    }

    /// Close the break at `end_time` and compute its length.
    pub fn close(mut self, end_time: DateTime<Local>) -> Self {
        self.duration = WorkDuration::from_delta(end_time - self.start_time);
        self.end_time = Some(end_time);
        self
    }

    pub fn minutes(&self) -> i64 {
        self.duration.total_secs() / 60
    }
}
