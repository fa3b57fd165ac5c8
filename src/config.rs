//! Server Configuration
//!
//! Configuration for the HTTP server and the backing store, loaded from a
//! JSON file. Every field has a default, and a missing file means "run with
//! defaults", so a bare `newswire start` works out of the box.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors are fatal at boot
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 9090)
    #[serde(default = "default_port")]
    pub port: u16,

    /// SQLite database file, created on first start (default: "./newswire.db")
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// CORS allowed origins; empty means permissive
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    9090
}

fn default_database_path() -> String {
    "./newswire.db".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            database_path: default_database_path(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a JSON file; a missing file yields defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: ServerConfig = serde_json::from_str(&content)?;
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    fn validate(&self) -> Result<(), ConfigError> {
        if self.host.is_empty() {
            return Err(ConfigError::Invalid("host must not be empty".to_string()));
        }
        if self.port == 0 {
            return Err(ConfigError::Invalid("port must be > 0".to_string()));
        }
        if self.database_path.is_empty() {
            return Err(ConfigError::Invalid(
                "database_path must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9090);
        assert_eq!(config.database_path, "./newswire.db");
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            port: 8080,
            ..Default::default()
        };
        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_load_missing_file_falls_back_to_defaults() {
        let config = ServerConfig::load(Path::new("./does-not-exist.json")).unwrap();
        assert_eq!(config.port, 9090);
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "port": 4000 }}"#).unwrap();

        let config = ServerConfig::load(file.path()).unwrap();
        assert_eq!(config.port, 4000);
        assert_eq!(config.host, "0.0.0.0");
    }

    #[test]
    fn test_load_rejects_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert!(matches!(
            ServerConfig::load(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_rejects_port_zero() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "port": 0 }}"#).unwrap();

        assert!(matches!(
            ServerConfig::load(file.path()),
            Err(ConfigError::Invalid(_))
        ));
    }
}
