use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_AUTH_URL, DEFAULT_GROUPS_URL, DEFAULT_MESSAGES_URL,
    DEFAULT_POSTS_URL,
};

use serde::Deserialize;

/// One URL per remote resource group.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EndpointsConfig {
    pub auth: String,
    pub posts: String,
    pub messages: String,
    pub groups: String,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            auth: String::from(DEFAULT_AUTH_URL),
            posts: String::from(DEFAULT_POSTS_URL),
            messages: String::from(DEFAULT_MESSAGES_URL),
            groups: String::from(DEFAULT_GROUPS_URL),
        }
    }
}

impl EndpointsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (name, url) in [
            ("auth", &self.auth),
            ("posts", &self.posts),
            ("messages", &self.messages),
            ("groups", &self.groups),
        ] {
            Self::validate_url(name, url)?;
        }
        Ok(())
    }

    fn validate_url(name: &str, url: &str) -> ConfigErrorResult<()> {
        let rest = url
            .strip_prefix("http://")
            .or_else(|| url.strip_prefix("https://"))
            .ok_or_else(|| {
                ConfigError::endpoint(format!(
                    "endpoints.{name} must start with http:// or https://, got '{url}'"
                ))
            })?;

        if rest.is_empty() || rest.starts_with('/') {
            return Err(ConfigError::endpoint(format!(
                "endpoints.{name} has no host: '{url}'"
            )));
        }

        Ok(())
    }
}
