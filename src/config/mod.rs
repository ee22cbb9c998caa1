//! Configuration loading and management

use crate::queries::posts::DEFAULT_RECENT_LIMIT;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading configuration or fixtures
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    /// `host:port`, ready for binding
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Settings for the post endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostsConfig {
    /// How many posts the "recent published" endpoint returns
    pub recent_limit: usize,
}

impl Default for PostsConfig {
    fn default() -> Self {
        Self {
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }
}

/// Complete application configuration
///
/// # Example
/// ```yaml
/// server:
///   host: 0.0.0.0
///   port: 8080
/// posts:
///   recent_limit: 5
/// log_filter: challenges=debug,tower_http=info
/// fixtures: fixtures/demo.yaml
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,

    pub posts: PostsConfig,

    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset
    pub log_filter: String,

    /// Optional path to a YAML fixture file loaded at startup
    pub fixtures: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            posts: PostsConfig::default(),
            log_filter: "info".to_string(),
            fixtures: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.posts.recent_limit == 0 {
            return Err(ConfigError::Invalid(
                "posts.recent_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.address(), "127.0.0.1:3000");
        assert_eq!(config.posts.recent_limit, 3);
        assert_eq!(config.log_filter, "info");
        assert!(config.fixtures.is_none());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = AppConfig::from_yaml_str("server:\n  port: 8080\n").unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.posts.recent_limit, 3);
    }

    #[test]
    fn test_yaml_serialization() {
        let config = AppConfig {
            fixtures: Some("seed.yaml".to_string()),
            ..AppConfig::default()
        };
        let yaml = serde_yaml::to_string(&config).unwrap();

        let parsed = AppConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_zero_recent_limit_rejected() {
        let err = AppConfig::from_yaml_str("posts:\n  recent_limit: 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_filter: debug").unwrap();

        let config = AppConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_missing_file() {
        let err = AppConfig::from_yaml_file("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
