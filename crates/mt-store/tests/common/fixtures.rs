use mt_core::{TrailId, UserRecord};
use mt_store::{MemorySlotStorage, SlotStorage};

use std::str::FromStr;
use std::sync::Arc;

use chrono::{TimeZone, Utc};

/// Creates a test UserRecord with a fixed registration time
pub fn create_test_user(trail_id: &str, email: &str) -> UserRecord {
    let registered = Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap();
    UserRecord::new(
        "Test Visitor".to_string(),
        email.to_string(),
        TrailId::from_str(trail_id).unwrap(),
        "test4242".to_string(),
        registered,
    )
}

/// Fresh in-memory slot storage behind the trait object repositories expect
pub fn memory_storage() -> Arc<dyn SlotStorage> {
    Arc::new(MemorySlotStorage::new())
}
