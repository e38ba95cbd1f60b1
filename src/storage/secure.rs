use super::cipher::Cipher;
use super::slot::SlotStore;
use crate::errors::PersistResult;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Serializes, encrypts and persists values under named slots.
///
/// `load` / `save` are fail-soft: a corrupted, tampered or unreadable slot
/// reads as "no data" and write failures are only logged. The `*_checked`
/// and `try_*` variants expose the underlying `PersistenceError`.
pub struct SecureStateStore {
    store: Box<dyn SlotStore>,
    cipher: Box<dyn Cipher>,
}

impl SecureStateStore {
    pub fn new(store: impl SlotStore + 'static, cipher: impl Cipher + 'static) -> Self {
        Self {
            store: Box::new(store),
            cipher: Box::new(cipher),
        }
    }

    pub fn try_save<T: Serialize>(&self, slot: &str, value: &T) -> PersistResult<()> {
        let json = serde_json::to_vec(value)?;
        let sealed = self.cipher.encrypt(&json)?;
        self.store.set(slot, &STANDARD.encode(sealed))?;
        debug!(slot, bytes = json.len(), "slot written");
        Ok(())
    }

    pub fn save<T: Serialize>(&self, slot: &str, value: &T) {
        if let Err(e) = self.try_save(slot, value) {
            warn!(slot, error = %e, "failed to persist slot");
        }
    }

    /// `Ok(None)` for an empty slot, `Err` when the slot exists but cannot be
    /// decoded, decrypted or deserialized.
    pub fn load_checked<T: DeserializeOwned>(&self, slot: &str) -> PersistResult<Option<T>> {
        let Some(encoded) = self.store.get(slot)? else {
            debug!(slot, "slot empty");
            return Ok(None);
        };
        let sealed = STANDARD.decode(encoded.trim())?;
        let json = self.cipher.decrypt(&sealed)?;
        let value = serde_json::from_slice(&json)?;
        debug!(slot, "slot read");
        Ok(Some(value))
    }

    pub fn load<T: DeserializeOwned>(&self, slot: &str) -> Option<T> {
        match self.load_checked(slot) {
            Ok(v) => v,
            Err(e) => {
                warn!(slot, error = %e, "unreadable slot treated as empty");
                None
            }
        }
    }

    pub fn try_remove(&self, slot: &str) -> PersistResult<()> {
        self.store.remove(slot)
    }

    pub fn remove(&self, slot: &str) {
        if let Err(e) = self.try_remove(slot) {
            warn!(slot, error = %e, "failed to clear slot");
        }
    }
}
