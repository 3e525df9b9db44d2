use std::panic::Location;

use error_location::ErrorLocation;
use sn_store::StoreError;
use thiserror::Error;

/// Errors surfaced by a gateway call.
///
/// `Rejected` is a domain-level refusal reported by the resource itself and
/// carries a message meant for the user. Every other variant is a transport
/// or storage failure.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Unexpected HTTP status {status} {location}")]
    Status { status: u16, location: ErrorLocation },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Response is missing '{field}' {location}")]
    MissingField {
        field: &'static str,
        location: ErrorLocation,
    },

    #[error("Rejected: {message} {location}")]
    Rejected {
        message: String,
        location: ErrorLocation,
    },

    #[error("Local store error: {source} {location}")]
    Store {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },
}

impl GatewayError {
    #[track_caller]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField {
            field,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn status(status: u16) -> Self {
        Self::Status {
            status,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The domain message, if the resource rejected the request.
    pub fn rejection(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } => Some(message.as_str()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        GatewayError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

impl From<serde_json::Error> for GatewayError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        GatewayError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

impl From<StoreError> for GatewayError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        GatewayError::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
