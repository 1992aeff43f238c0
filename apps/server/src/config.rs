//! Server configuration module.
//!
//! Configuration is loaded once from environment variables with fallback to
//! defaults, then shared read-only with every component.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use oilmill_db::DbConfig;
use serde::Serialize;

/// Signing secret used when `SECRET_KEY` is unset. Development only.
pub const DEV_SECRET_KEY: &str = "dev-secret";

/// Server configuration.
#[derive(Debug, Clone, Serialize)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,

    /// HTTP port
    pub port: u16,

    /// SQLite database file
    pub database_path: PathBuf,

    /// Secret for signing flash cookies
    #[serde(skip_serializing)]
    pub secret_key: String,

    /// How long SQLite waits on a locked database
    pub db_busy_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let config = ServerConfig {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),

            port: lookup("PORT")
                .unwrap_or_else(|| "5000".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("PORT".to_string()))?,

            database_path: lookup("DB_PATH")
                .unwrap_or_else(|| "data.db".to_string())
                .into(),

            secret_key: lookup("SECRET_KEY").unwrap_or_else(|| DEV_SECRET_KEY.to_string()),

            db_busy_timeout_secs: lookup("DB_BUSY_TIMEOUT_SECS")
                .unwrap_or_else(|| "5".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DB_BUSY_TIMEOUT_SECS".to_string()))?,
        };

        if config.secret_key.is_empty() {
            return Err(ConfigError::MissingRequired("SECRET_KEY".to_string()));
        }

        Ok(config)
    }

    /// Socket address to listen on.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidValue("HOST".to_string()))
    }

    /// Database settings derived from this config.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(&self.database_path)
            .busy_timeout(Duration::from_secs(self.db_busy_timeout_secs))
    }

    /// True when running with the built-in development secret.
    pub fn uses_dev_secret(&self) -> bool {
        self.secret_key == DEV_SECRET_KEY
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}
