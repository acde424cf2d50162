//! Trail ID - the human-enterable identifier printed on a visitor's card.

use crate::{CoreError, Result as CoreErrorResult};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const TRAIL_ID_PREFIX: &str = "MT-";
pub const TRAIL_ID_SUFFIX_LEN: usize = 6;

/// Uppercase letters and digits without the look-alikes `0`, `1`, `I`, `O`.
pub const TRAIL_ID_ALPHABET: &[u8; 32] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// A Trail ID of the form `MT-XXXXXX`.
///
/// Deserialization does not re-validate: stored records are taken as they are,
/// and lookups compare raw strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrailId(String);

impl TrailId {
    /// Builds an id from a suffix drawn from [`TRAIL_ID_ALPHABET`].
    pub fn from_suffix(suffix: &str) -> CoreErrorResult<Self> {
        Self::from_str(&format!("{TRAIL_ID_PREFIX}{suffix}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `value` is a well-formed Trail ID.
    pub fn is_valid(value: &str) -> bool {
        match value.strip_prefix(TRAIL_ID_PREFIX) {
            Some(suffix) => {
                suffix.len() == TRAIL_ID_SUFFIX_LEN
                    && suffix.bytes().all(|b| TRAIL_ID_ALPHABET.contains(&b))
            }
            None => false,
        }
    }
}

impl FromStr for TrailId {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        if Self::is_valid(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(CoreError::invalid_trail_id(s))
        }
    }
}

impl PartialEq<str> for TrailId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl std::fmt::Display for TrailId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
