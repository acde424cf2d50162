pub mod dashboard;
pub mod error;
pub mod flow_mode;
pub mod identity_generator;
pub mod qr_payload;
pub mod time_ago;
pub mod trail_flow;

pub use dashboard::{ActivityEntry, Dashboard, DashboardView, KioskBadge};
pub use error::{FlowError, Result};
pub use flow_mode::FlowMode;
pub use identity_generator::IdentityGenerator;
pub use qr_payload::{QR_PAYLOAD_TYPE, QrPayload};
pub use time_ago::format_time_ago;
pub use trail_flow::{TrailFlow, is_valid_email};

#[cfg(test)]
mod tests;
