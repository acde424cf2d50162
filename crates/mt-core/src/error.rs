use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid trail id: {value} {location}")]
    InvalidTrailId {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid kiosk: {value} {location}")]
    InvalidKiosk {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Creates InvalidTrailId error at caller location.
    #[track_caller]
    pub fn invalid_trail_id(value: impl Into<String>) -> Self {
        Self::InvalidTrailId {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates InvalidKiosk error at caller location.
    #[track_caller]
    pub fn invalid_kiosk(value: impl Into<String>) -> Self {
        Self::InvalidKiosk {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
