use crate::{DEFAULT_LOG_LEVEL, DEFAULT_LOG_LEVEL_STRING};

use std::ops::Deref;
use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Deserializer};

/// Wrapper for LevelFilter with lenient deserialization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLevel(pub LevelFilter);

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel(DEFAULT_LOG_LEVEL)
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)
            .unwrap_or_else(|_| String::from(DEFAULT_LOG_LEVEL_STRING));

        Ok(LogLevel::parse_lenient(&s))
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(log_level: LogLevel) -> Self {
        log_level.0
    }
}

impl Deref for LogLevel {
    type Target = LevelFilter;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl LogLevel {
    /// Unknown names fall back to the default level.
    pub fn parse_lenient(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "off" => LogLevel(LevelFilter::Off),
            "error" => LogLevel(LevelFilter::Error),
            "warn" => LogLevel(LevelFilter::Warn),
            "info" => LogLevel(LevelFilter::Info),
            "debug" => LogLevel(LevelFilter::Debug),
            "trace" => LogLevel(LevelFilter::Trace),
            _ => LogLevel::default(),
        }
    }
}

impl FromStr for LogLevel {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(LogLevel::parse_lenient(s))
    }
}
