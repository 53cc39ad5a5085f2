//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the defaults run a self-contained server:
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 5000)
//! - `STOREFRONT_DATABASE_URL` - SQLite connection string
//!   (default: `sqlite::memory:`)

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// SQLite connection string. The default keeps the whole store in
    /// process memory; nothing survives a restart.
    pub database_url: String,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let mut config = Self::default();

        if let Ok(raw) = std::env::var("STOREFRONT_HOST") {
            config.host = raw
                .parse()
                .map_err(|_| ConfigError::InvalidEnvVar("STOREFRONT_HOST".to_string(), raw))?;
        }

        if let Ok(raw) = std::env::var("STOREFRONT_PORT") {
            config.port = raw
                .parse()
                .map_err(|_| ConfigError::InvalidEnvVar("STOREFRONT_PORT".to_string(), raw))?;
        }

        if let Ok(raw) = std::env::var("STOREFRONT_DATABASE_URL") {
            config.database_url = raw;
        }

        Ok(config)
    }

    /// Socket address to bind the server to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.port, 5000);
        assert_eq!(config.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(config.database_url, "sqlite::memory:");
    }

    #[test]
    fn test_socket_addr() {
        let config = StorefrontConfig {
            port: 8080,
            ..StorefrontConfig::default()
        };
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
    }
}
