//! User record - one visitor's card as persisted in the users slot.

use crate::models::lenient::null_as_default;
use crate::{CardVersion, Kiosk, TrailId};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered visitor.
///
/// Field names serialize in camelCase to stay readable by kiosk software that
/// shares the same slot format. Counters and lists written as `null` by that
/// software read as zero or empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub full_name: String,
    /// Lowercase-normalized, unique across the store
    pub email: String,
    pub trail_id: TrailId,
    /// Display-only, may collide
    pub username: String,
    #[serde(default)]
    pub card_version: CardVersion,
    #[serde(default, deserialize_with = "null_as_default")]
    pub points: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub completed_quizzes: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub completed_games: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub achievements: Vec<serde_json::Value>,
    pub registered_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
}

impl UserRecord {
    /// Create a fresh record: version 1, no points, nothing completed.
    pub fn new(
        full_name: String,
        email: String,
        trail_id: TrailId,
        username: String,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            full_name,
            email,
            trail_id,
            username,
            card_version: CardVersion::MIN,
            points: 0,
            completed_quizzes: Vec::new(),
            completed_games: Vec::new(),
            achievements: Vec::new(),
            registered_at: now,
            last_active: now,
        }
    }

    /// First whitespace-delimited token of the full name.
    pub fn first_name(&self) -> &str {
        self.full_name.split_whitespace().next().unwrap_or("")
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.last_active = now;
    }

    pub fn has_completed(&self, kiosk: Kiosk) -> bool {
        self.completed_games.iter().any(|id| id == kiosk.id())
    }

    /// Catalog kiosks this user has completed, in the order they were recorded.
    /// Unknown ids and repeats are skipped.
    pub fn completed_kiosks(&self) -> Vec<Kiosk> {
        let mut kiosks: Vec<Kiosk> = Vec::with_capacity(self.completed_games.len());
        for kiosk in self.completed_games.iter().filter_map(|id| Kiosk::from_id(id)) {
            if !kiosks.contains(&kiosk) {
                kiosks.push(kiosk);
            }
        }
        kiosks
    }

    /// Marks `kiosk` complete. Returns `false` if it was already recorded.
    ///
    /// The card tier follows the number of distinct completions but never drops.
    pub fn record_completion(&mut self, kiosk: Kiosk) -> bool {
        if self.has_completed(kiosk) {
            return false;
        }
        self.completed_games.push(kiosk.id().to_string());
        let earned = CardVersion::for_completed(self.completed_kiosks().len());
        self.card_version = self.card_version.max(earned);
        true
    }
}
