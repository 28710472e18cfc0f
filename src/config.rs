//! Configuration module for loading and parsing TOML configuration files.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse TOML configuration.
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// Invalid configuration value.
    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port number to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// PostgreSQL connection string for the marts database.
    pub url: String,
    /// Maximum number of pooled connections.
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "postgres://localhost/quantfoot".to_string(),
            max_connections: 10,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file.
    ///
    /// # Errors
    /// Returns error if file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Arguments
    /// * `content` - TOML content as string.
    ///
    /// # Errors
    /// Returns error if content cannot be parsed.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration values.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.is_empty() {
            return Err(ConfigError::InvalidValue(
                "server host cannot be empty".to_string(),
            ));
        }
        if self.database.url.is_empty() {
            return Err(ConfigError::InvalidValue(
                "database url cannot be empty".to_string(),
            ));
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::InvalidValue(
                "database max_connections must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
[server]
host = "127.0.0.1"
port = 3000

[database]
url = "postgres://quantfoot:quantfoot@db:5432/quantfoot"
max_connections = 5
"#;

        let config = Config::parse(toml_content).expect("should parse");
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(
            config.database.url,
            "postgres://quantfoot:quantfoot@db:5432/quantfoot"
        );
        assert_eq!(config.database.max_connections, 5);
    }

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = Config::parse("").expect("should parse");
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.max_connections, 10);
    }

    #[test]
    fn test_validation_empty_database_url() {
        let config = Config {
            server: ServerConfig::default(),
            database: DatabaseConfig {
                url: String::new(),
                max_connections: 10,
            },
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_max_connections() {
        let config = Config {
            server: ServerConfig::default(),
            database: DatabaseConfig {
                url: "postgres://localhost/quantfoot".to_string(),
                max_connections: 0,
            },
        };
        assert!(config.validate().is_err());
    }
}
