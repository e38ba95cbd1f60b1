pub mod breaks;
pub mod checkin;
pub mod checkout;
pub mod clear;
pub mod config;
pub mod export;
pub mod history;
pub mod init;
pub mod report;
pub mod status;

use crate::config::Config;
use crate::core::{SystemClock, TimeTracker};
use crate::db::SqliteSlotStore;
use crate::errors::{AppError, AppResult};
use crate::storage::{ChaChaCipher, SecureStateStore};
use std::path::Path;
use std::rc::Rc;

/// Open the encrypted store configured in `cfg` and resume the session.
pub(crate) fn open_tracker(cfg: &Config) -> AppResult<TimeTracker> {
    let key_path = Path::new(&cfg.key_file);
    if !key_path.exists() {
        return Err(AppError::Config(format!(
            "key file {} not found, run `rtimeclock init` first",
            key_path.display()
        )));
    }

    let cipher = ChaChaCipher::load_key_file(key_path)?;
    let slots = SqliteSlotStore::open(&cfg.database)?;
    let store = SecureStateStore::new(slots, cipher);

    Ok(TimeTracker::new(
        store,
        Rc::new(SystemClock),
        cfg.tracker_settings(),
    ))
}
