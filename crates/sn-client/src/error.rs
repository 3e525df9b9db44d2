use crate::Action;

use std::panic::Location;

use error_location::ErrorLocation;
use sn_config::ConfigError;
use sn_core::CoreError;
use sn_gateway::GatewayError;
use sn_store::StoreError;
use thiserror::Error;

/// How a failure is presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Caught before any gateway call
    Validation,
    /// The resource refused the request; its message is shown as-is
    Domain,
    /// Network, parse or storage failure; a generic message is shown
    Transport,
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to {}: {source} {location}", .action.describe())]
    Gateway {
        action: Action,
        #[source]
        source: GatewayError,
        location: ErrorLocation,
    },

    #[error("Session store error: {source} {location}")]
    Store {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },

    #[error("Config error: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },
}

impl ClientError {
    #[track_caller]
    pub fn gateway(action: Action, source: GatewayError) -> Self {
        Self::Gateway {
            action,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation { .. } => ErrorCategory::Validation,
            Self::Gateway { source, .. } if source.rejection().is_some() => ErrorCategory::Domain,
            Self::Gateway { .. } | Self::Store { .. } | Self::Config { .. } => {
                ErrorCategory::Transport
            }
        }
    }

    /// Text for the notice shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::Gateway { action, source, .. } => match source.rejection() {
                Some(message) => message.to_string(),
                None => format!(
                    "Could not {}. Please try again later.",
                    action.describe()
                ),
            },
            Self::Store { .. } => {
                "Could not access local storage. Please try again later.".to_string()
            }
            Self::Config { source } => format!("Configuration problem: {source}"),
        }
    }
}

impl From<CoreError> for ClientError {
    #[track_caller]
    fn from(err: CoreError) -> Self {
        Self::Validation {
            message: err.user_message(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<StoreError> for ClientError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
