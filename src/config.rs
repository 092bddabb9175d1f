//! Configuration management.
//!
//! Supports configuration from:
//! - TOML config files
//! - `HOTELWIRE_*` environment variables
//! - CLI arguments (for the server binary)

use std::net::SocketAddr;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WireError};
use crate::router::DEFAULT_MAX_REQUEST_BYTES;

/// Main configuration struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| WireError::Config(format!("failed to read config file: {e}")))?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(host) = std::env::var("HOTELWIRE_HOST") {
            config.server.host = host;
        }
        if let Ok(port) = std::env::var("HOTELWIRE_PORT") {
            if let Ok(port) = port.parse() {
                config.server.port = port;
            }
        }
        if let Ok(max) = std::env::var("HOTELWIRE_MAX_REQUEST_BYTES") {
            if let Ok(max) = max.parse() {
                config.server.max_request_bytes = max;
            }
        }
        if let Ok(level) = std::env::var("HOTELWIRE_LOG") {
            config.server.log_level = level;
        }

        config
    }

    /// Merge with another config (other takes precedence over defaults).
    pub fn merge(self, other: Self) -> Self {
        let defaults = ServerConfig::default();
        Self {
            server: ServerConfig {
                host: if other.server.host == defaults.host {
                    self.server.host
                } else {
                    other.server.host
                },
                port: if other.server.port == defaults.port {
                    self.server.port
                } else {
                    other.server.port
                },
                max_request_bytes: if other.server.max_request_bytes
                    == defaults.max_request_bytes
                {
                    self.server.max_request_bytes
                } else {
                    other.server.max_request_bytes
                },
                log_level: if other.server.log_level == defaults.log_level {
                    self.server.log_level
                } else {
                    other.server.log_level
                },
            },
        }
    }
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Maximum request body size in bytes.
    pub max_request_bytes: usize,
    /// Default log filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8080,
            max_request_bytes: DEFAULT_MAX_REQUEST_BYTES,
            log_level: "info".to_owned(),
        }
    }
}

impl ServerConfig {
    /// The socket address to bind.
    pub fn addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| WireError::Config(format!("invalid bind address: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.max_request_bytes, DEFAULT_MAX_REQUEST_BYTES);
        assert!(config.server.addr().is_ok());
    }

    #[test]
    fn test_parse_toml() {
        let config: Config = toml::from_str(
            r#"
            [server]
            host = "0.0.0.0"
            port = 9090
            max_request_bytes = 2097152
            log_level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.max_request_bytes, 2 * 1024 * 1024);
    }

    #[test]
    fn test_merge_prefers_non_default_values() {
        let mut base = Config::default();
        base.server.port = 9000;

        let mut overlay = Config::default();
        overlay.server.host = "0.0.0.0".to_owned();

        let merged = base.merge(overlay);
        assert_eq!(merged.server.port, 9000);
        assert_eq!(merged.server.host, "0.0.0.0");
    }
}
