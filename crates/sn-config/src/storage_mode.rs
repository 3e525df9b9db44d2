use crate::ConfigError;

use std::str::FromStr;

use serde::Deserialize;

/// Which persistence strategy backs the gateway.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageMode {
    /// Talk to the four HTTP endpoints
    #[default]
    Remote,
    /// Keep every record in the local key-value store
    Local,
}

impl StorageMode {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Remote => "remote",
            Self::Local => "local",
        }
    }
}

impl FromStr for StorageMode {
    type Err = ConfigError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "remote" => Ok(Self::Remote),
            "local" => Ok(Self::Local),
            other => Err(ConfigError::storage(format!(
                "storage.mode must be 'remote' or 'local', got '{other}'"
            ))),
        }
    }
}
