//! `TimeTracker` wires clock, storage, session, ledger and reports together
//! and is what the CLI talks to.

use crate::core::clock::Clock;
use crate::core::ledger::{DEFAULT_HISTORY_CAPACITY, HistoryLedger};
use crate::core::report::ReportAggregator;
use crate::core::session::SessionStateMachine;
use crate::errors::TransitionError;
use crate::models::{BreakRecord, DailyTimeRecord, SessionSnapshot, WeeklyReport, WorkDuration};
use crate::storage::{HISTORY_SLOT, SESSION_SLOT, SecureStateStore};
use crate::utils::time::{DEFAULT_MAX_BREAK_MINUTES, format_duration, validate_break_duration};
use chrono::{DateTime, Local, NaiveDate};
use std::rc::Rc;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy)]
pub struct TrackerSettings {
    pub history_capacity: usize,
    pub max_break_minutes: i64,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            max_break_minutes: DEFAULT_MAX_BREAK_MINUTES,
        }
    }
}

pub struct TimeTracker {
    clock: Rc<dyn Clock>,
    store: Rc<SecureStateStore>,
    session: SessionStateMachine,
    reports: ReportAggregator,
    settings: TrackerSettings,
}

impl TimeTracker {
    /// Build the tracker and resume any persisted session.
    pub fn new(store: SecureStateStore, clock: Rc<dyn Clock>, settings: TrackerSettings) -> Self {
        let store = Rc::new(store);
        let ledger = HistoryLedger::new(Rc::clone(&store), settings.history_capacity);
        let reports = ReportAggregator::new(ledger.clone());
        let session = SessionStateMachine::restore(Rc::clone(&clock), Rc::clone(&store), ledger);

        Self {
            clock,
            store,
            session,
            reports,
            settings,
        }
    }

    pub fn check_in(&mut self) -> Result<DateTime<Local>, TransitionError> {
        self.session.check_in()
    }

    pub fn start_break(&mut self, reason: Option<String>) -> Result<BreakRecord, TransitionError> {
        self.session.start_break(reason)
    }

    /// Close the open break. Exceeding the break policy is only logged.
    pub fn end_break(&mut self) -> Result<BreakRecord, TransitionError> {
        let closed = self.session.end_break()?;
        if !self.validate_break_duration(closed.minutes()) {
            warn!(
                minutes = closed.minutes(),
                max = self.settings.max_break_minutes,
                "break exceeded the allowed duration"
            );
        }
        Ok(closed)
    }

    pub fn check_out(
        &mut self,
        efficiency: f64,
        notes: Option<String>,
    ) -> Result<DailyTimeRecord, TransitionError> {
        self.session.check_out(efficiency, notes)
    }

    pub fn current_state(&self) -> &SessionSnapshot {
        self.session.state()
    }

    /// Work time accumulated so far in the running session.
    pub fn elapsed_work(&self) -> WorkDuration {
        self.session.state().elapsed_work(self.clock.now())
    }

    pub fn time_history(&self) -> Vec<DailyTimeRecord> {
        self.session.ledger().read()
    }

    pub fn weekly_report(&self, week_start: NaiveDate) -> WeeklyReport {
        self.reports.generate_weekly_report(week_start)
    }

    pub fn format_time(&self, duration: &WorkDuration) -> String {
        format_duration(duration)
    }

    pub fn validate_break_duration(&self, minutes: i64) -> bool {
        validate_break_duration(minutes, self.settings.max_break_minutes)
    }

    pub fn settings(&self) -> TrackerSettings {
        self.settings
    }

    /// Erase both slots and forget the running session.
    pub fn clear_data(&mut self) {
        self.store.remove(SESSION_SLOT);
        self.store.remove(HISTORY_SLOT);
        self.session.reset();
        info!("time tracking data cleared");
    }
}
