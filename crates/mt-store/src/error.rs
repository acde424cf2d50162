use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors raised by slot storage and the repositories built on it.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read slot file at {path}: {source} {location}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to write slot file at {path}: {source} {location}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to remove slot file at {path}: {source} {location}")]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to create slot directory at {path}: {source} {location}")]
    DirCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Atomic rename failed from {from} to {to}: {source} {location}")]
    AtomicRename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to serialize slot value: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Storage quota exceeded writing '{key}': {required} bytes needed, quota is {quota} {location}")]
    QuotaExceeded {
        key: String,
        required: u64,
        quota: u64,
        location: ErrorLocation,
    },

    #[error("Invalid slot key '{key}' {location}")]
    InvalidKey {
        key: String,
        location: ErrorLocation,
    },

    #[error("Slot storage lock poisoned {location}")]
    LockPoisoned { location: ErrorLocation },
}

impl StoreError {
    pub fn is_quota(&self) -> bool {
        matches!(self, Self::QuotaExceeded { .. })
    }

    /// User-friendly recovery hint.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            Self::Read { .. } => {
                "Unable to read saved data. \
                   The file may be locked by another process."
            }
            Self::Write { .. } | Self::DirCreation { .. } | Self::Remove { .. } => {
                "Unable to write to the data directory. \
                   Check disk space and file permissions."
            }
            Self::AtomicRename { .. } => {
                "Unable to save data safely. \
                   Check disk space and try again."
            }
            Self::QuotaExceeded { .. } => {
                "Storage is full. \
                   Raise storage.quota_bytes or clear old data."
            }
            Self::Serialization { .. } | Self::InvalidKey { .. } | Self::LockPoisoned { .. } => {
                "Internal storage error. \
                   Please report this issue."
            }
        }
    }

    /// Creates Read error at caller location.
    #[track_caller]
    pub fn read(path: PathBuf, source: std::io::Error) -> Self {
        Self::Read {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Write error at caller location.
    #[track_caller]
    pub fn write(path: PathBuf, source: std::io::Error) -> Self {
        Self::Write {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Remove error at caller location.
    #[track_caller]
    pub fn remove(path: PathBuf, source: std::io::Error) -> Self {
        Self::Remove {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates DirCreation error at caller location.
    #[track_caller]
    pub fn dir_creation(path: PathBuf, source: std::io::Error) -> Self {
        Self::DirCreation {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates AtomicRename error at caller location.
    #[track_caller]
    pub fn atomic_rename(from: PathBuf, to: PathBuf, source: std::io::Error) -> Self {
        Self::AtomicRename {
            from,
            to,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates QuotaExceeded error at caller location.
    #[track_caller]
    pub fn quota_exceeded(key: impl Into<String>, required: u64, quota: u64) -> Self {
        Self::QuotaExceeded {
            key: key.into(),
            required,
            quota,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates InvalidKey error at caller location.
    #[track_caller]
    pub fn invalid_key(key: impl Into<String>) -> Self {
        Self::InvalidKey {
            key: key.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates LockPoisoned error at caller location.
    #[track_caller]
    pub fn lock_poisoned() -> Self {
        Self::LockPoisoned {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
