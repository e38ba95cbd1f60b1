#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Local, NaiveDate, TimeZone};
use rtimeclock::core::{Clock, ManualClock, TimeTracker, TrackerSettings};
use rtimeclock::models::{DailyTimeRecord, WorkDuration};
use rtimeclock::storage::{ChaChaCipher, MemoryStore, SecureStateStore};
use std::path::PathBuf;
use std::rc::Rc;
use tempfile::TempDir;

pub const PASSPHRASE: &str = "correct horse battery staple";

/// Local instant on 2025-03-10 (a Monday) at `h:m`.
pub fn at(h: u32, m: u32) -> DateTime<Local> {
    on(2025, 3, 10, h, m)
}

pub fn on(y: i32, mo: u32, d: u32, h: u32, m: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(y, mo, d, h, m, 0)
        .single()
        .expect("unambiguous local time")
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn secure_store(slots: &MemoryStore) -> SecureStateStore {
    SecureStateStore::new(slots.clone(), ChaChaCipher::from_passphrase(PASSPHRASE))
}

/// Tracker over an in-memory store, driven by a manual clock.
pub struct Harness {
    pub clock: Rc<ManualClock>,
    pub slots: MemoryStore,
    pub tracker: TimeTracker,
}

impl Harness {
    pub fn new(start: DateTime<Local>) -> Self {
        Self::with_slots(start, MemoryStore::new())
    }

    /// Reuse existing slots, as a reopened process would.
    pub fn with_slots(start: DateTime<Local>, slots: MemoryStore) -> Self {
        let clock = Rc::new(ManualClock::new(start));
        let dyn_clock: Rc<dyn Clock> = clock.clone();
        let tracker = TimeTracker::new(secure_store(&slots), dyn_clock, TrackerSettings::default());
        Self {
            clock,
            slots,
            tracker,
        }
    }

    pub fn set(&self, t: DateTime<Local>) {
        self.clock.set(t);
    }
}

/// A finalized record with the given work/break split.
pub fn record(
    date: NaiveDate,
    work_h: u32,
    work_m: u32,
    break_m: u32,
    efficiency: f64,
) -> DailyTimeRecord {
    let check_in = Local
        .from_local_datetime(&date.and_hms_opt(9, 0, 0).expect("valid time"))
        .single()
        .expect("unambiguous local time");
    DailyTimeRecord {
        date,
        check_in_time: check_in,
        check_out_time: None,
        total_work_time: WorkDuration::new(work_h, work_m, 0),
        total_break_time: WorkDuration::new(0, break_m, 0),
        breaks: Vec::new(),
        notes: None,
        efficiency,
    }
}

// ---------------------------------------------------------------
// CLI helpers
// ---------------------------------------------------------------

pub fn rtc() -> Command {
    cargo_bin_cmd!("rtimeclock")
}

/// Isolated home directory with its own database and key file.
pub struct CliEnv {
    pub dir: TempDir,
}

impl CliEnv {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("temp dir"),
        }
    }

    pub fn db(&self) -> String {
        self.path("timeclock.sqlite").to_string_lossy().to_string()
    }

    pub fn key(&self) -> String {
        self.path("timeclock.key").to_string_lossy().to_string()
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn cmd(&self, args: &[&str]) -> Command {
        let mut cmd = rtc();
        cmd.env("HOME", self.dir.path())
            .env("APPDATA", self.dir.path())
            .env_remove("RUST_LOG")
            .args(["--db", &self.db(), "--key-file", &self.key()])
            .args(args);
        cmd
    }

    pub fn init(&self) {
        self.cmd(&["init"]).assert().success();
    }
}
