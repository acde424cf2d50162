use mt_core::UserRecord;

use serde::{Deserialize, Serialize};

/// Discriminator scanners use to recognize a Memory Trail card.
pub const QR_PAYLOAD_TYPE: &str = "memory-trail-user";

/// Data encoded into the card's QR code. Rendering the image is left to the
/// presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrPayload {
    pub trail_id: String,
    pub username: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl QrPayload {
    pub fn for_user(user: &UserRecord) -> Self {
        Self {
            trail_id: user.trail_id.to_string(),
            username: user.username.clone(),
            kind: QR_PAYLOAD_TYPE.to_string(),
        }
    }

    /// Compact JSON text to hand to a QR encoder.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Suggested file name for a downloaded QR image.
    pub fn download_filename(&self) -> String {
        format!("memory-trail-qr-{}.png", self.trail_id)
    }
}
