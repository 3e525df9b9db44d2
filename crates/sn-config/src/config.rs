use crate::{
    CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    EndpointsConfig, LoggingConfig, StorageConfig, StorageMode,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub endpoints: EndpointsConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Read `.env` from the working directory if present
    /// 2. Check for SN_CONFIG_DIR env var, else use ./.sn/
    /// 3. Auto-create config directory if it doesn't exist
    /// 4. Load config.toml if it exists, else use defaults
    /// 5. Apply SN_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let _ = dotenvy::dotenv();

        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: SN_CONFIG_DIR env var > ./.sn/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.endpoints.validate()?;
        self.storage.validate()?;
        Ok(())
    }

    /// Absolute path of the key-value store directory.
    pub fn storage_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.storage.dir))
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref filename) => {
                let log_dir = Self::config_dir()?.join(&self.logging.dir);
                Ok(Some(log_dir.join(filename)))
            }
            None => Ok(None),
        }
    }

    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  storage: {} ({})", self.storage.mode.as_str(), self.storage.dir);
        if self.storage.mode == StorageMode::Remote {
            info!("  endpoints.auth: {}", self.endpoints.auth);
            info!("  endpoints.posts: {}", self.endpoints.posts);
            info!("  endpoints.messages: {}", self.endpoints.messages);
            info!("  endpoints.groups: {}", self.endpoints.groups);
        }
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Endpoints
        Self::apply_env_string("SN_AUTH_URL", &mut self.endpoints.auth);
        Self::apply_env_string("SN_POSTS_URL", &mut self.endpoints.posts);
        Self::apply_env_string("SN_MESSAGES_URL", &mut self.endpoints.messages);
        Self::apply_env_string("SN_GROUPS_URL", &mut self.endpoints.groups);

        // Storage
        Self::apply_env_parse("SN_STORAGE_MODE", &mut self.storage.mode);
        Self::apply_env_string("SN_STORAGE_DIR", &mut self.storage.dir);

        // Logging
        Self::apply_env_parse("SN_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("SN_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("SN_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
