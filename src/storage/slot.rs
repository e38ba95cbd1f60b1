use crate::errors::PersistResult;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Minimal key/value capability behind the encrypted store.
pub trait SlotStore {
    fn get(&self, slot: &str) -> PersistResult<Option<String>>;
    fn set(&self, slot: &str, value: &str) -> PersistResult<()>;
    fn remove(&self, slot: &str) -> PersistResult<()>;
}

/// In-memory store. Clones share the same map, so a test can keep a handle
/// and inspect or corrupt slots after handing a clone to the core.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, slot: &str) -> bool {
        self.slots.borrow().contains_key(slot)
    }
}

impl SlotStore for MemoryStore {
    fn get(&self, slot: &str) -> PersistResult<Option<String>> {
        Ok(self.slots.borrow().get(slot).cloned())
    }

    fn set(&self, slot: &str, value: &str) -> PersistResult<()> {
        self.slots
            .borrow_mut()
            .insert(slot.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, slot: &str) -> PersistResult<()> {
        self.slots.borrow_mut().remove(slot);
        Ok(())
    }
}
