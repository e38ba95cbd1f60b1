use super::{break_record::BreakRecord, duration::WorkDuration};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SessionStatus {
    #[default]
    CheckedOut,
    CheckedIn,
    OnBreak,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::CheckedOut => "checked out",
            SessionStatus::CheckedIn => "checked in",
            SessionStatus::OnBreak => "on break",
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The live, not yet finalized session. This is what goes into the
/// `session-state` slot after every transition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub status: SessionStatus,
    #[serde(default)]
    pub check_in_time: Option<DateTime<Local>>,
    #[serde(default)]
    pub breaks: Vec<BreakRecord>,
    #[serde(default)]
    pub current_break: Option<BreakRecord>,
    #[serde(default)]
    pub total_break_time: WorkDuration,
}

impl SessionSnapshot {
    pub fn is_checked_out(&self) -> bool {
        self.status == SessionStatus::CheckedOut
    }

    /// Time worked so far at `now`, excluding closed breaks and the open one.
    pub fn elapsed_work(&self, now: DateTime<Local>) -> WorkDuration {
        let Some(start) = self.check_in_time else {
            return WorkDuration::ZERO;
        };
        let mut secs = (now - start).num_seconds() - self.total_break_time.total_secs();
        if let Some(open) = &self.current_break {
            secs -= (now - open.start_time).num_seconds();
        }
        WorkDuration::from_secs(secs)
    }
}
