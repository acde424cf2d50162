pub mod card_version;
pub mod kiosk;
pub mod trail_id;
pub(crate) mod lenient;
pub mod user_record;
