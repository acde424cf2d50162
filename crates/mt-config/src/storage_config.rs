use crate::{ConfigError, ConfigErrorResult, DEFAULT_STORAGE_DIR, DEFAULT_STORAGE_QUOTA_BYTES};

use serde::Deserialize;

/// Where the persistent slots live and how large they may grow.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Slot directory, relative to the config directory
    pub dir: String,
    /// Total bytes across all slots (0 = unlimited)
    pub quota_bytes: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_STORAGE_DIR),
            quota_bytes: DEFAULT_STORAGE_QUOTA_BYTES,
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.dir.trim().is_empty() {
            return Err(ConfigError::storage("storage.dir must not be empty"));
        }

        let path = std::path::Path::new(&self.dir);
        if path.is_absolute() || self.dir.contains("..") {
            return Err(ConfigError::storage(
                "storage.dir must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Quota as the storage layer expects it.
    pub fn quota(&self) -> Option<u64> {
        (self.quota_bytes > 0).then_some(self.quota_bytes)
    }
}
