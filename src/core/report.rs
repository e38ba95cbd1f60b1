use crate::core::ledger::HistoryLedger;
use crate::models::{DailyTimeRecord, WeeklyReport};
use chrono::{NaiveDate, TimeDelta};

/// Read-only weekly reporting over the ledger.
#[derive(Clone)]
pub struct ReportAggregator {
    ledger: HistoryLedger,
}

impl ReportAggregator {
    pub fn new(ledger: HistoryLedger) -> Self {
        Self { ledger }
    }

    pub fn generate_weekly_report(&self, week_start: NaiveDate) -> WeeklyReport {
        weekly_report(&self.ledger.read(), week_start)
    }
}

/// Summarize the records dated in `[week_start, week_start + 7 days)`.
///
/// `records` is expected newest first; on an efficiency tie the first record
/// scanned (the most recent one) is the most productive day.
pub fn weekly_report(records: &[DailyTimeRecord], week_start: NaiveDate) -> WeeklyReport {
    let week_end = week_start + TimeDelta::days(7);
    let week: Vec<&DailyTimeRecord> = records
        .iter()
        .filter(|r| r.date >= week_start && r.date < week_end)
        .collect();

    if week.is_empty() {
        return WeeklyReport::empty(week_start);
    }

    let work_hours: f64 = week.iter().map(|r| r.total_work_time.fractional_hours()).sum();
    let break_minutes: f64 = week.iter().map(|r| r.total_break_time.whole_minutes()).sum();
    let efficiency_sum: f64 = week.iter().map(|r| r.efficiency).sum();

    let mut best = week[0];
    for &r in &week[1..] {
        if r.efficiency > best.efficiency {
            best = r;
        }
    }

    WeeklyReport {
        week_start_date: week_start,
        total_work_hours: round2(work_hours),
        average_efficiency: (efficiency_sum / week.len() as f64).round() as i64,
        total_break_time: break_minutes.round() as i64,
        most_productive_day: best.date_str(),
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
