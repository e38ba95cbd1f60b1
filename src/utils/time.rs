//! Time utilities: `HH:MM:SS` rendering and the break-length policy.

use crate::models::WorkDuration;
use chrono::{DateTime, Local};

pub const DEFAULT_MAX_BREAK_MINUTES: i64 = 60;

/// Render as zero-padded `HH:MM:SS`. Hours widen past 99.
pub fn format_duration(d: &WorkDuration) -> String {
    format!("{:02}:{:02}:{:02}", d.hours, d.minutes, d.seconds)
}

/// Advisory check: is a break of `minutes` within `max_minutes`?
pub fn validate_break_duration(minutes: i64, max_minutes: i64) -> bool {
    (0..=max_minutes).contains(&minutes)
}

pub fn clock_str(t: &DateTime<Local>) -> String {
    t.format("%H:%M:%S").to_string()
}
