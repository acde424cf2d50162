use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_MAX_TRAIL_ID_ATTEMPTS, MAX_MAX_TRAIL_ID_ATTEMPTS,
    MIN_MAX_TRAIL_ID_ATTEMPTS,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    /// Draws before Trail ID generation gives up on collisions
    pub max_trail_id_attempts: u32,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            max_trail_id_attempts: DEFAULT_MAX_TRAIL_ID_ATTEMPTS,
        }
    }
}

impl IdentityConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_trail_id_attempts < MIN_MAX_TRAIL_ID_ATTEMPTS
            || self.max_trail_id_attempts > MAX_MAX_TRAIL_ID_ATTEMPTS
        {
            return Err(ConfigError::identity(format!(
                "identity.max_trail_id_attempts must be {}-{}, got {}",
                MIN_MAX_TRAIL_ID_ATTEMPTS, MAX_MAX_TRAIL_ID_ATTEMPTS, self.max_trail_id_attempts
            )));
        }

        Ok(())
    }
}
