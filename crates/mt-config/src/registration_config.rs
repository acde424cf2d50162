use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_MIN_NAME_LENGTH, MAX_MIN_NAME_LENGTH,
    MIN_MIN_NAME_LENGTH,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RegistrationConfig {
    /// Minimum trimmed length of a full name, in characters
    pub min_name_length: usize,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            min_name_length: DEFAULT_MIN_NAME_LENGTH,
        }
    }
}

impl RegistrationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.min_name_length < MIN_MIN_NAME_LENGTH || self.min_name_length > MAX_MIN_NAME_LENGTH
        {
            return Err(ConfigError::registration(format!(
                "registration.min_name_length must be {}-{}, got {}",
                MIN_MIN_NAME_LENGTH, MAX_MIN_NAME_LENGTH, self.min_name_length
            )));
        }

        Ok(())
    }
}
