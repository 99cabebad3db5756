//! Application settings loaded from environment variables.

use std::env;

use super::constants::{DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT};
use crate::errors::{AppError, AppResult};

/// Application configuration
///
/// Built once at startup and handed to the components that need it.
/// There is no default database URL: it must come from the environment
/// or be passed to [`Config::new`].
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}

impl Config {
    /// Create a configuration for the given database with default bind address.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
        }
    }

    /// Load configuration from environment variables (and `.env` if present).
    ///
    /// Fails when `DATABASE_URL` is not set.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| AppError::configuration("DATABASE_URL must be set"))?;

        Ok(Self {
            database_url,
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
        })
    }

    /// Override the bind address (CLI flags take precedence over the environment).
    pub fn with_server(mut self, host: impl Into<String>, port: u16) -> Self {
        self.server_host = host.into();
        self.server_port = port;
        self
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_bind_address() {
        let config = Config::new("postgres://localhost/trivia");
        assert_eq!(config.server_addr(), "0.0.0.0:5000");
    }

    #[test]
    fn test_with_server_overrides_address() {
        let config = Config::new("postgres://localhost/trivia").with_server("127.0.0.1", 8080);
        assert_eq!(config.server_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_debug_redacts_database_url() {
        let config = Config::new("postgres://admin:hunter2@db/trivia");
        let printed = format!("{:?}", config);
        assert!(!printed.contains("hunter2"));
        assert!(printed.contains("[REDACTED]"));
    }
}
