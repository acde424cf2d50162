use crate::TOTAL_ACTIVITIES;

use serde::{Deserialize, Deserializer, Serialize};

/// Card tier, 1 through 4.
///
/// Deserialization clamps into range so a bad value on one record does not
/// make the whole users slot unreadable. A missing or zero value becomes 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CardVersion(u8);

impl CardVersion {
    pub const MIN: CardVersion = CardVersion(1);
    pub const MAX: CardVersion = CardVersion(TOTAL_ACTIVITIES as u8);

    /// Clamps `value` into `[MIN, MAX]`.
    pub fn new(value: u8) -> Self {
        Self(value.clamp(Self::MIN.0, Self::MAX.0))
    }

    /// Tier earned by completing `completed` distinct kiosks.
    pub fn for_completed(completed: usize) -> Self {
        Self::new(u8::try_from(completed.saturating_add(1)).unwrap_or(u8::MAX))
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    pub fn is_max(&self) -> bool {
        *self >= Self::MAX
    }

    /// Badge color used by presenters.
    pub fn color(&self) -> &'static str {
        match self.0 {
            1 => "#6b7280",
            2 => "#10b981",
            3 => "#f59e0b",
            _ => "#8B5CF6",
        }
    }
}

impl Default for CardVersion {
    fn default() -> Self {
        Self::MIN
    }
}

impl<'de> Deserialize<'de> for CardVersion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<i64>::deserialize(deserializer)?.unwrap_or(1);
        let clamped = raw.clamp(i64::from(Self::MIN.0), i64::from(Self::MAX.0));
        Ok(Self(clamped as u8))
    }
}

impl std::fmt::Display for CardVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
