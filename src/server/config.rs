//! Environment based configuration.

use std::net::SocketAddr;

use dioxus_logger::tracing::Level;

use crate::server::error::config::ConfigError;

/// Address the HTTP server binds to when `BIND_ADDRESS` is unset.
pub static DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Server configuration loaded from environment variables.
pub struct Config {
    /// Database connection URL (`DATABASE_URL`).
    pub database_url: String,
    /// Socket address the HTTP server listens on (`BIND_ADDRESS`).
    pub bind_address: SocketAddr,
    /// Maximum log level (`LOG_LEVEL`, defaults to `info`).
    pub log_level: Level,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and optional ones valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` is not set
    /// - `Err(ConfigError::InvalidEnvValue)` - `BIND_ADDRESS` or `LOG_LEVEL` failed to parse
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_address = lookup("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: "BIND_ADDRESS".to_string(),
                reason: e.to_string(),
            })?;

        let log_level = match lookup("LOG_LEVEL") {
            Some(level) => level
                .parse::<Level>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "LOG_LEVEL".to_string(),
                    reason: e.to_string(),
                })?,
            None => Level::INFO,
        };

        Ok(Self {
            database_url,
            bind_address,
            log_level,
        })
    }
}
