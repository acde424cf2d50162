//! Trail ID and username generation.
//!
//! Trail IDs are drawn uniformly from a 32-symbol alphabet, so a single draw
//! collides with an existing id with probability `users / 32^6`. Collisions
//! are retried up to a fixed cap and then reported as a hard failure.

use crate::{FlowError, Result as FlowResult};

use mt_core::{TRAIL_ID_ALPHABET, TRAIL_ID_SUFFIX_LEN, TrailId};

use std::ops::RangeInclusive;

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

const USERNAME_NAME_MAX_LEN: usize = 8;
const USERNAME_SUFFIX_RANGE: RangeInclusive<u32> = 1000..=9999;

pub struct IdentityGenerator {
    rng: Box<dyn RngCore>,
    max_attempts: u32,
}

impl IdentityGenerator {
    /// Generator seeded from the operating system.
    pub fn new(max_attempts: u32) -> Self {
        Self::with_rng(max_attempts, StdRng::from_os_rng())
    }

    /// Generator over a caller-supplied random source.
    pub fn with_rng(max_attempts: u32, rng: impl RngCore + 'static) -> Self {
        Self {
            rng: Box::new(rng),
            max_attempts: max_attempts.max(1),
        }
    }

    /// Draws Trail IDs until one is not `taken`, up to `max_attempts` draws.
    pub fn generate_trail_id(
        &mut self,
        mut taken: impl FnMut(&TrailId) -> bool,
    ) -> FlowResult<TrailId> {
        for attempt in 1..=self.max_attempts {
            let candidate = self.draw_trail_id()?;
            if !taken(&candidate) {
                return Ok(candidate);
            }
            debug!("Trail ID {candidate} already taken (attempt {attempt})");
        }

        warn!(
            "Gave up generating a Trail ID after {} attempts",
            self.max_attempts
        );
        Err(FlowError::identity_exhausted(self.max_attempts))
    }

    /// First name, lowercased, letters only, at most 8 chars, plus 4 random digits.
    ///
    /// Usernames are for display and are not checked for uniqueness.
    pub fn generate_username(&mut self, full_name: &str) -> String {
        let name_part: String = full_name
            .split_whitespace()
            .next()
            .unwrap_or("")
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_lowercase())
            .take(USERNAME_NAME_MAX_LEN)
            .collect();

        let number = self.rng.random_range(USERNAME_SUFFIX_RANGE);
        format!("{name_part}{number}")
    }

    fn draw_trail_id(&mut self) -> FlowResult<TrailId> {
        let suffix: String = (0..TRAIL_ID_SUFFIX_LEN)
            .map(|_| {
                let index = self.rng.random_range(0..TRAIL_ID_ALPHABET.len());
                char::from(TRAIL_ID_ALPHABET[index])
            })
            .collect();

        Ok(TrailId::from_suffix(&suffix)?)
    }
}
