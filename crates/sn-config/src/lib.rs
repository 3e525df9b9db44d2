mod config;
mod endpoints_config;
mod error;
mod log_level;
mod logging_config;
mod storage_config;
mod storage_mode;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use endpoints_config::EndpointsConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;
pub use storage_mode::StorageMode;

const CONFIG_DIR_ENV: &str = "SN_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".sn";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_AUTH_URL: &str = "http://127.0.0.1:8000/auth";
const DEFAULT_POSTS_URL: &str = "http://127.0.0.1:8000/posts";
const DEFAULT_MESSAGES_URL: &str = "http://127.0.0.1:8000/messages";
const DEFAULT_GROUPS_URL: &str = "http://127.0.0.1:8000/groups";

const DEFAULT_STORAGE_DIR: &str = "storage";

const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_COLORED: bool = true;
const DEFAULT_LOG_DIRECTORY: &str = "log";
