//! Configuration loading from the process environment

use crate::schema::{Credentials, PixelaConfig};
use pixela_common::PixelaError;
use std::env;
use thiserror::Error;
use tracing::{debug, info};

/// Secret token variable.
pub const TOKEN_VAR: &str = "TOKEN";
/// Account name variable.
pub const USER_NAME_VAR: &str = "USER_NAME";
/// Optional base URL override.
pub const BASE_URL_VAR: &str = "PIXELA_BASE_URL";
/// Optional timeout override, in seconds.
pub const TIMEOUT_VAR: &str = "PIXELA_TIMEOUT";
/// Optional `User-Agent` override.
pub const USER_AGENT_VAR: &str = "PIXELA_USER_AGENT";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required setting is absent or empty
    #[error("Missing required configuration: {0}")]
    MissingConfig(&'static str),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        var: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for PixelaError {
    fn from(err: ConfigError) -> Self {
        Self::config_with_source(err.to_string(), err)
    }
}

/// Builds a [`PixelaConfig`] from environment variables.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads from the process environment. Fails if `TOKEN` or `USER_NAME` is missing.
    pub fn from_env() -> Result<PixelaConfig, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Loads through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<PixelaConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let token = read(TOKEN_VAR).ok_or(ConfigError::MissingConfig(TOKEN_VAR))?;
        let username = read(USER_NAME_VAR).ok_or(ConfigError::MissingConfig(USER_NAME_VAR))?;

        let mut config = PixelaConfig::new(Credentials::new(token, username.trim()));

        if let Some(base_url) = read(BASE_URL_VAR) {
            debug!(base_url = %base_url, "Using base URL override");
            config.base_url = base_url.trim().to_string();
        }

        if let Some(timeout) = read(TIMEOUT_VAR) {
            let seconds = timeout
                .trim()
                .parse::<u64>()
                .map_err(|e| ConfigError::EnvParseError {
                    var: TIMEOUT_VAR,
                    source: Box::new(e),
                })?;
            config.timeout_seconds = Some(seconds);
        }

        if let Some(user_agent) = read(USER_AGENT_VAR) {
            config.user_agent = user_agent;
        }

        config.validate_all()?;
        info!(username = %config.credentials.username, "Loaded Pixela configuration");
        Ok(config)
    }
}
