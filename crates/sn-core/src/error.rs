use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid notification type: {value} {location}")]
    InvalidNotificationType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid timestamp: {value} {location}")]
    InvalidTimestamp {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message suitable for showing next to the form that failed.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::InvalidNotificationType { value, .. } => {
                format!("Unknown notification type '{value}'")
            }
            Self::InvalidTimestamp { value, .. } => format!("Invalid date '{value}'"),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
