use crate::{DEFAULT_LOG_COLORED, DEFAULT_LOG_DIRECTORY, LogLevel};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub colored: bool,
    /// Directory for `file`, relative to the config dir
    pub dir: String,
    /// Log file name. None = stderr
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            colored: DEFAULT_LOG_COLORED,
            dir: String::from(DEFAULT_LOG_DIRECTORY),
            file: None,
        }
    }
}
