//! User repository - CRUD over the users slot.
//!
//! ## Corrupt slot policy
//!
//! If the users slot holds JSON that does not parse as an array, `list()`
//! logs a warning and returns an empty collection instead of failing. The next
//! `insert()` then overwrites the unreadable value.
//!
//! Inside a readable array each entry stands alone. An entry that does not
//! match `UserRecord` is skipped by reads with a warning but kept verbatim
//! when the slot is written back, so one odd record never costs the others.
//!
//! ## Single writer
//!
//! Every mutation is read-modify-write of the whole slot. Two writers racing
//! each other will lose updates, and a uniqueness check followed by `insert()`
//! is not atomic.

use crate::{Result as StoreResult, SlotStorage, USERS_SLOT};

use mt_core::UserRecord;

use std::sync::Arc;

use log::{debug, warn};
use serde_json::Value;

pub struct UserRepository {
    storage: Arc<dyn SlotStorage>,
}

impl UserRepository {
    pub fn new(storage: Arc<dyn SlotStorage>) -> Self {
        Self { storage }
    }

    /// All readable users in insertion order. Absent or corrupt slot yields empty.
    pub fn list(&self) -> StoreResult<Vec<UserRecord>> {
        let users: Vec<UserRecord> = self
            .load_entries()?
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match serde_json::from_value(entry) {
                Ok(user) => Some(user),
                Err(e) => {
                    warn!("Skipping unreadable entry {index} in users slot '{USERS_SLOT}': {e}");
                    None
                }
            })
            .collect();

        Ok(users)
    }

    /// Exact, case-sensitive match.
    pub fn find_by_trail_id(&self, trail_id: &str) -> StoreResult<Option<UserRecord>> {
        Ok(self
            .list()?
            .into_iter()
            .find(|u| u.trail_id.as_str() == trail_id))
    }

    /// Exact, case-sensitive match. Callers normalize case first.
    pub fn exists_by_email(&self, email: &str) -> StoreResult<bool> {
        Ok(self.list()?.iter().any(|u| u.email == email))
    }

    /// Appends without checking uniqueness.
    pub fn insert(&self, user: &UserRecord) -> StoreResult<()> {
        let mut entries = self.load_entries()?;
        entries.push(serde_json::to_value(user)?);
        self.save_entries(&entries)?;

        debug!("Inserted user {} ({} total)", user.trail_id, entries.len());
        Ok(())
    }

    /// Overwrites the first entry with the same Trail ID.
    ///
    /// Returns `false` and writes nothing when no entry matches.
    pub fn replace(&self, user: &UserRecord) -> StoreResult<bool> {
        let mut entries = self.load_entries()?;

        let Some(slot) = entries
            .iter_mut()
            .find(|entry| entry_trail_id(entry) == Some(user.trail_id.as_str()))
        else {
            debug!("Replace skipped, no user {}", user.trail_id);
            return Ok(false);
        };
        *slot = serde_json::to_value(user)?;

        self.save_entries(&entries)?;
        Ok(true)
    }

    /// Raw entries of the users slot. Absent or non-array JSON yields empty.
    fn load_entries(&self) -> StoreResult<Vec<Value>> {
        let Some(raw) = self.storage.read(USERS_SLOT)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<Value>>(&raw) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!("Users slot '{USERS_SLOT}' is corrupted, treating as empty: {e}");
                Ok(Vec::new())
            }
        }
    }

    fn save_entries(&self, entries: &[Value]) -> StoreResult<()> {
        let json = serde_json::to_string(entries)?;
        self.storage.write(USERS_SLOT, &json)
    }
}

fn entry_trail_id(entry: &Value) -> Option<&str> {
    entry.get("trailId").and_then(Value::as_str)
}
