use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// Elapsed time split into hours / minutes / seconds.
///
/// Values built from a `TimeDelta` are normalized (minutes and seconds below 60,
/// negative spans clamped to zero). Values built by hand are taken as given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkDuration {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl WorkDuration {
    pub const ZERO: WorkDuration = WorkDuration {
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    pub fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    pub fn from_secs(total: i64) -> Self {
        let total = total.max(0);
        let hours = u32::try_from(total / 3600).unwrap_or(u32::MAX);
        Self {
            hours,
            minutes: ((total % 3600) / 60) as u32,
            seconds: (total % 60) as u32,
        }
    }

    pub fn from_delta(delta: TimeDelta) -> Self {
        Self::from_secs(delta.num_seconds())
    }

    pub fn total_secs(&self) -> i64 {
        i64::from(self.hours) * 3600 + i64::from(self.minutes) * 60 + i64::from(self.seconds)
    }

    /// Hours with the minute fraction; seconds are ignored.
    pub fn fractional_hours(&self) -> f64 {
        f64::from(self.hours) + f64::from(self.minutes) / 60.0
    }

    /// Whole minutes; seconds are ignored.
    pub fn whole_minutes(&self) -> f64 {
        f64::from(self.hours) * 60.0 + f64::from(self.minutes)
    }
}

impl Add for WorkDuration {
    type Output = WorkDuration;

    fn add(self, rhs: WorkDuration) -> WorkDuration {
        WorkDuration::from_secs(self.total_secs() + rhs.total_secs())
    }
}

impl fmt::Display for WorkDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}
