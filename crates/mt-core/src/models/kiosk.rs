//! The fixed catalog of kiosk activities.

use crate::{CoreError, Result as CoreErrorResult};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of kiosks in the catalog.
pub const TOTAL_ACTIVITIES: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kiosk {
    #[serde(rename = "kiosk1-guess-the-era")]
    GuessTheEra,
    #[serde(rename = "kiosk2-rebuilding-np")]
    RebuildingNp,
    #[serde(rename = "kiosk3-np-trivia")]
    NpTrivia,
    #[serde(rename = "kiosk4-time-capsule")]
    TimeCapsule,
}

impl Kiosk {
    /// Catalog order.
    pub const ALL: [Kiosk; TOTAL_ACTIVITIES] = [
        Kiosk::GuessTheEra,
        Kiosk::RebuildingNp,
        Kiosk::NpTrivia,
        Kiosk::TimeCapsule,
    ];

    /// Identifier stored in `completedGames`.
    pub fn id(&self) -> &'static str {
        match self {
            Self::GuessTheEra => "kiosk1-guess-the-era",
            Self::RebuildingNp => "kiosk2-rebuilding-np",
            Self::NpTrivia => "kiosk3-np-trivia",
            Self::TimeCapsule => "kiosk4-time-capsule",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::GuessTheEra => "Guess the Era",
            Self::RebuildingNp => "Rebuilding NP",
            Self::NpTrivia => "NP Trivia",
            Self::TimeCapsule => "Time Capsule",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::GuessTheEra => "📷",
            Self::RebuildingNp => "🧩",
            Self::NpTrivia => "🎯",
            Self::TimeCapsule => "💌",
        }
    }

    /// Looks up a catalog entry by stored id. Unknown ids yield `None`.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.id() == id)
    }
}

impl FromStr for Kiosk {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        Self::from_id(s).ok_or_else(|| CoreError::invalid_kiosk(s))
    }
}

impl std::fmt::Display for Kiosk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
