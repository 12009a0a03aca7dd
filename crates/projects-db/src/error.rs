use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// Transport-level database failure (connection lost, timeout).
    #[error("store unavailable: {source} {location}")]
    Unavailable {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    /// A persisted row no longer parses (bad UUID, JSON, or timestamp).
    #[error("corrupt record: {message} {location}")]
    Corrupt {
        message: String,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn corrupt<S: Into<String>>(message: S) -> Self {
        StoreError::Corrupt {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::Error> for StoreError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Unavailable {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
