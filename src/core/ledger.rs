use crate::models::DailyTimeRecord;
use crate::storage::{HISTORY_SLOT, SecureStateStore};
use std::rc::Rc;
use tracing::debug;

pub const DEFAULT_HISTORY_CAPACITY: usize = 30;

/// Bounded list of finalized days, newest first, kept in the `time-history` slot.
///
/// The slot is the single source of truth: every call reads it back, so a
/// write from another process is picked up (last writer wins).
/// `capacity` is expected to be at least 1; `Config::validate` enforces it.
#[derive(Clone)]
pub struct HistoryLedger {
    store: Rc<SecureStateStore>,
    capacity: usize,
}

impl HistoryLedger {
    pub fn new(store: Rc<SecureStateStore>, capacity: usize) -> Self {
        Self { store, capacity }
    }

    /// Current records, or an empty list when nothing readable is stored.
    pub fn read(&self) -> Vec<DailyTimeRecord> {
        self.store
            .load::<Vec<DailyTimeRecord>>(HISTORY_SLOT)
            .unwrap_or_default()
    }

    /// Prepend `record`, drop the oldest entries beyond capacity, persist.
    pub fn append(&self, record: DailyTimeRecord) {
        let mut records = self.read();
        records.insert(0, record);

        if records.len() > self.capacity {
            let evicted = records.len() - self.capacity;
            records.truncate(self.capacity);
            debug!(evicted, "history capacity reached, oldest records dropped");
        }

        self.store.save(HISTORY_SLOT, &records);
    }

    pub fn clear(&self) {
        self.store.remove(HISTORY_SLOT);
    }
}
