use crate::storage::{SlotStorage, check_quota, validate_key};
use crate::{Result as StoreResult, StoreError};

use std::collections::HashMap;
use std::sync::Mutex;

/// Slots held in process memory.
///
/// Used for session-scoped slots and as the test double for file storage.
#[derive(Debug, Default)]
pub struct MemorySlotStorage {
    slots: Mutex<HashMap<String, String>>,
    quota: Option<u64>,
}

impl MemorySlotStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that rejects writes pushing the total size past `quota` bytes.
    pub fn with_quota(quota: u64) -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
            quota: Some(quota),
        }
    }
}

impl SlotStorage for MemorySlotStorage {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        validate_key(key)?;
        let slots = self.slots.lock().map_err(|_| StoreError::lock_poisoned())?;
        Ok(slots.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> StoreResult<()> {
        validate_key(key)?;
        let mut slots = self.slots.lock().map_err(|_| StoreError::lock_poisoned())?;

        let others_total: u64 = slots
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(_, v)| v.len() as u64)
            .sum();
        check_quota(key, others_total, value.len(), self.quota)?;

        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        validate_key(key)?;
        let mut slots = self.slots.lock().map_err(|_| StoreError::lock_poisoned())?;
        slots.remove(key);
        Ok(())
    }
}
