mod config;
mod error;
mod identity_config;
mod log_level;
mod logging_config;
mod registration_config;
mod storage_config;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use identity_config::IdentityConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use registration_config::RegistrationConfig;
pub use storage_config::StorageConfig;

#[cfg(test)]
mod tests;

const CONFIG_DIR_ENV: &str = "MT_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".memory-trail";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_STORAGE_DIR: &str = "data";
/// Mirrors the usual 5 MiB browser local-storage quota.
const DEFAULT_STORAGE_QUOTA_BYTES: u64 = 5 * 1024 * 1024;

const DEFAULT_MAX_TRAIL_ID_ATTEMPTS: u32 = 16;
const MIN_MAX_TRAIL_ID_ATTEMPTS: u32 = 1;
const MAX_MAX_TRAIL_ID_ATTEMPTS: u32 = 1000;

const DEFAULT_MIN_NAME_LENGTH: usize = 2;
const MIN_MIN_NAME_LENGTH: usize = 1;
const MAX_MIN_NAME_LENGTH: usize = 64;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
