//! Session repository - the "current user" pointer.
//!
//! The snapshot is independent of the users slot. Changes made to it are not
//! written back unless the caller also updates the `UserRepository`.

use crate::{CURRENT_USER_SLOT, KIOSK_USER_SLOT, Result as StoreResult, SlotStorage};

use mt_core::UserRecord;

use std::sync::Arc;

use log::{info, warn};

pub struct SessionRepository {
    /// Holds `currentUser`
    local: Arc<dyn SlotStorage>,
    /// Holds session-scoped slots such as `kioskUser`
    session: Arc<dyn SlotStorage>,
}

impl SessionRepository {
    pub fn new(local: Arc<dyn SlotStorage>, session: Arc<dyn SlotStorage>) -> Self {
        Self { local, session }
    }

    /// The signed-in user, if any. A corrupt snapshot reads as signed out.
    pub fn current(&self) -> StoreResult<Option<UserRecord>> {
        let Some(raw) = self.local.read(CURRENT_USER_SLOT)? else {
            return Ok(None);
        };

        match serde_json::from_str::<UserRecord>(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                warn!("Session slot '{CURRENT_USER_SLOT}' is corrupted, treating as signed out: {e}");
                Ok(None)
            }
        }
    }

    pub fn set(&self, user: &UserRecord) -> StoreResult<()> {
        let json = serde_json::to_string(user)?;
        self.local.write(CURRENT_USER_SLOT, &json)
    }

    /// Drops the current user and every session-scoped slot.
    pub fn clear(&self) -> StoreResult<()> {
        self.local.remove(CURRENT_USER_SLOT)?;
        self.session.remove(KIOSK_USER_SLOT)?;

        info!("Session cleared");
        Ok(())
    }
}
