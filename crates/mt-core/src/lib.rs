pub mod clock;
pub mod error;
pub mod models;

pub use clock::{Clock, SystemClock};
pub use error::{CoreError, Result};
pub use models::card_version::CardVersion;
pub use models::kiosk::{Kiosk, TOTAL_ACTIVITIES};
pub use models::trail_id::{TRAIL_ID_ALPHABET, TRAIL_ID_PREFIX, TRAIL_ID_SUFFIX_LEN, TrailId};
pub use models::user_record::UserRecord;

#[cfg(test)]
mod tests;
