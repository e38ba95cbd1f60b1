use crate::core::clock::Clock;
use crate::core::ledger::HistoryLedger;
use crate::errors::TransitionError;
use crate::models::{BreakRecord, DailyTimeRecord, SessionSnapshot, SessionStatus, WorkDuration};
use crate::storage::{SESSION_SLOT, SecureStateStore};
use chrono::{DateTime, Local};
use std::rc::Rc;
use tracing::{info, warn};

/// Check-in / break / check-out cycle for the current day.
///
/// ```text
/// CheckedOut --check_in--> CheckedIn --start_break--> OnBreak
///     ^                       |  ^                       |
///     +------check_out--------+  +-------end_break-------+
/// ```
///
/// Each successful transition writes the snapshot to the `session-state`
/// slot; `check_out` appends to the ledger and clears the slot instead.
/// A rejected call leaves memory, slot and ledger untouched.
pub struct SessionStateMachine {
    clock: Rc<dyn Clock>,
    store: Rc<SecureStateStore>,
    ledger: HistoryLedger,
    state: SessionSnapshot,
}

impl SessionStateMachine {
    /// Build the machine and resume whatever session the slot holds.
    pub fn restore(
        clock: Rc<dyn Clock>,
        store: Rc<SecureStateStore>,
        ledger: HistoryLedger,
    ) -> Self {
        let state = store
            .load::<SessionSnapshot>(SESSION_SLOT)
            .map(sanitize)
            .unwrap_or_default();

        if !state.is_checked_out() {
            info!(status = %state.status, "resumed session");
        }

        Self {
            clock,
            store,
            ledger,
            state,
        }
    }

    pub fn state(&self) -> &SessionSnapshot {
        &self.state
    }

    pub fn status(&self) -> SessionStatus {
        self.state.status
    }

    pub fn ledger(&self) -> &HistoryLedger {
        &self.ledger
    }

    pub fn check_in(&mut self) -> Result<DateTime<Local>, TransitionError> {
        if !self.state.is_checked_out() {
            return Err(TransitionError::AlreadyCheckedIn);
        }

        let now = self.clock.now();
        self.state = SessionSnapshot {
            status: SessionStatus::CheckedIn,
            check_in_time: Some(now),
            ..SessionSnapshot::default()
        };
        self.persist();

        info!(at = %now, "checked in");
        Ok(now)
    }

    pub fn start_break(&mut self, reason: Option<String>) -> Result<BreakRecord, TransitionError> {
        if self.state.status != SessionStatus::CheckedIn {
            return Err(TransitionError::InvalidState {
                action: "start a break",
                state: self.state.status,
            });
        }

        let now = self.clock.now();
        let open = BreakRecord::open(now, reason);
        self.state.status = SessionStatus::OnBreak;
        self.state.current_break = Some(open.clone());
        self.persist();

        info!(at = %now, "break started");
        Ok(open)
    }

    /// Close the open break and return it.
    pub fn end_break(&mut self) -> Result<BreakRecord, TransitionError> {
        if self.state.status != SessionStatus::OnBreak {
            return Err(TransitionError::NoActiveBreak);
        }
        let open = self
            .state
            .current_break
            .take()
            .ok_or(TransitionError::NoActiveBreak)?;

        let closed = open.close(self.clock.now());
        self.state.total_break_time = self.state.total_break_time + closed.duration;
        self.state.breaks.push(closed.clone());
        self.state.status = SessionStatus::CheckedIn;
        self.persist();

        info!(duration = %closed.duration, "break ended");
        Ok(closed)
    }

    /// Finalize the session into a `DailyTimeRecord`. `efficiency` is taken as
    /// given but must be finite, since NaN/inf cannot round-trip through the
    /// history slot.
    pub fn check_out(
        &mut self,
        efficiency: f64,
        notes: Option<String>,
    ) -> Result<DailyTimeRecord, TransitionError> {
        match self.state.status {
            SessionStatus::CheckedOut => return Err(TransitionError::NotCheckedIn),
            SessionStatus::OnBreak => {
                return Err(TransitionError::InvalidState {
                    action: "check out",
                    state: SessionStatus::OnBreak,
                });
            }
            SessionStatus::CheckedIn => {}
        }
        if !efficiency.is_finite() {
            return Err(TransitionError::InvalidEfficiency);
        }
        let check_in_time = self
            .state
            .check_in_time
            .ok_or(TransitionError::NotCheckedIn)?;

        let now = self.clock.now();
        let worked = (now - check_in_time).num_seconds() - self.state.total_break_time.total_secs();

        let record = DailyTimeRecord {
            date: now.date_naive(),
            check_in_time,
            check_out_time: Some(now),
            total_work_time: WorkDuration::from_secs(worked),
            total_break_time: self.state.total_break_time,
            breaks: std::mem::take(&mut self.state.breaks),
            notes,
            efficiency,
        };

        self.ledger.append(record.clone());
        self.state = SessionSnapshot::default();
        self.store.remove(SESSION_SLOT);

        info!(date = %record.date, worked = %record.total_work_time, "checked out");
        Ok(record)
    }

    /// Drop the in-memory session without touching storage.
    pub(crate) fn reset(&mut self) {
        self.state = SessionSnapshot::default();
    }

    fn persist(&self) {
        self.store.save(SESSION_SLOT, &self.state);
    }
}

/// A snapshot whose fields contradict its status is discarded.
fn sanitize(snapshot: SessionSnapshot) -> SessionSnapshot {
    let breaks_closed = snapshot.breaks.iter().all(|b| !b.is_open());
    let break_total = snapshot
        .breaks
        .iter()
        .fold(WorkDuration::ZERO, |acc, b| acc + b.duration);
    let ledger_ok = breaks_closed && break_total == snapshot.total_break_time;

    let consistent = match snapshot.status {
        SessionStatus::CheckedOut => true,
        SessionStatus::CheckedIn => {
            ledger_ok && snapshot.check_in_time.is_some() && snapshot.current_break.is_none()
        }
        SessionStatus::OnBreak => {
            ledger_ok
                && snapshot.check_in_time.is_some()
                && snapshot.current_break.as_ref().is_some_and(BreakRecord::is_open)
        }
    };

    if consistent {
        snapshot
    } else {
        warn!(status = %snapshot.status, "inconsistent session snapshot discarded");
        SessionSnapshot::default()
    }
}
