use mt_core::CoreError;
use mt_store::StoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors surfaced by registration, login and the dashboard.
#[derive(Error, Debug)]
pub enum FlowError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Email already registered: {email} {location}")]
    DuplicateEmail {
        email: String,
        location: ErrorLocation,
    },

    #[error("Trail ID not found: {trail_id} {location}")]
    NotFound {
        trail_id: String,
        location: ErrorLocation,
    },

    #[error("No user is signed in {location}")]
    NoActiveSession { location: ErrorLocation },

    #[error("No free Trail ID after {attempts} attempts {location}")]
    IdentityExhausted {
        attempts: u32,
        location: ErrorLocation,
    },

    #[error("Core error: {0}")]
    Core(#[from] CoreError),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

impl FlowError {
    /// Input or lookup problems the visitor can fix; storage and identity
    /// allocation failures are not.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. }
                | Self::DuplicateEmail { .. }
                | Self::NotFound { .. }
                | Self::NoActiveSession { .. }
                | Self::Core(_)
        )
    }

    /// Short message suitable for showing inline to the visitor.
    pub fn user_message(&self) -> &str {
        match self {
            Self::Validation { message, .. } => message,
            Self::DuplicateEmail { .. } => "This email is already registered.",
            Self::NotFound { .. } => "Trail ID not found. Please check and try again.",
            Self::NoActiveSession { .. } => "Please register or log in first.",
            Self::IdentityExhausted { .. } => "Could not create a Trail ID. Please try again.",
            Self::Core(CoreError::InvalidKiosk { .. }) => "Unknown kiosk.",
            Self::Core(_) => "Invalid input.",
            Self::Store(e) => e.recovery_hint(),
        }
    }

    /// Creates Validation error at caller location.
    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates DuplicateEmail error at caller location.
    #[track_caller]
    pub fn duplicate_email(email: impl Into<String>) -> Self {
        Self::DuplicateEmail {
            email: email.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates NotFound error at caller location.
    #[track_caller]
    pub fn not_found(trail_id: impl Into<String>) -> Self {
        Self::NotFound {
            trail_id: trail_id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates NoActiveSession error at caller location.
    #[track_caller]
    pub fn no_active_session() -> Self {
        Self::NoActiveSession {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates IdentityExhausted error at caller location.
    #[track_caller]
    pub fn identity_exhausted(attempts: u32) -> Self {
        Self::IdentityExhausted {
            attempts,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, FlowError>;
