//! Named key-value slots holding serialized JSON.
//!
//! A slot is the unit of persistence: every write replaces the whole value.

pub mod file_slot_storage;
pub mod memory_slot_storage;

use crate::{Result as StoreResult, StoreError};

/// JSON array of every registered user.
pub const USERS_SLOT: &str = "memoryTrailUsers";
/// Snapshot of the signed-in user.
pub const CURRENT_USER_SLOT: &str = "currentUser";
/// Session-scoped kiosk marker, opaque to this crate; cleared on logout.
pub const KIOSK_USER_SLOT: &str = "kioskUser";

/// Backing store for slots.
pub trait SlotStorage: Send + Sync {
    /// Returns `None` if the slot has never been written or was removed.
    fn read(&self, key: &str) -> StoreResult<Option<String>>;

    /// Replaces the slot value.
    fn write(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Removing an absent slot is not an error.
    fn remove(&self, key: &str) -> StoreResult<()>;
}

/// Keys double as file names, so only `[A-Za-z0-9_-]` is allowed.
#[track_caller]
pub(crate) fn validate_key(key: &str) -> StoreResult<()> {
    let valid = !key.is_empty()
        && key
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');

    if valid {
        Ok(())
    } else {
        Err(StoreError::invalid_key(key))
    }
}

/// Fails when replacing one slot would push the total past `quota`.
#[track_caller]
pub(crate) fn check_quota(
    key: &str,
    others_total: u64,
    value_len: usize,
    quota: Option<u64>,
) -> StoreResult<()> {
    let Some(quota) = quota else {
        return Ok(());
    };

    let required = others_total.saturating_add(value_len as u64);
    if required > quota {
        return Err(StoreError::quota_exceeded(key, required, quota));
    }

    Ok(())
}
