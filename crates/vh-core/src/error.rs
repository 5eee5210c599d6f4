use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid video category: {value} {location}")]
    InvalidVideoCategory {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid timestamp '{value}': {source} {location}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Creates InvalidVideoCategory error at caller location.
    #[track_caller]
    pub fn invalid_video_category(value: impl Into<String>) -> Self {
        Self::InvalidVideoCategory {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates InvalidTimestamp error at caller location.
    #[track_caller]
    pub fn invalid_timestamp(value: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::InvalidTimestamp {
            value: value.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
