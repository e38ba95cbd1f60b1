//! Encrypted slot persistence.
//!
//! `SlotStore` is the raw key/value capability (memory or SQLite),
//! `Cipher` the reversible transform, and `SecureStateStore` glues them
//! together with JSON serialization.

pub mod cipher;
pub mod secure;
pub mod slot;

pub use cipher::{ChaChaCipher, Cipher};
pub use secure::SecureStateStore;
pub use slot::{MemoryStore, SlotStore};

/// Slot holding the in-progress session snapshot.
pub const SESSION_SLOT: &str = "session-state";
/// Slot holding the finalized daily records, newest first.
pub const HISTORY_SLOT: &str = "time-history";
