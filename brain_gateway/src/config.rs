//! Gateway configuration loaded from an optional TOML file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Address the gateway binds when none is configured.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8787";

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Configuration error type.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file.
    #[error("failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML.
    #[error("failed to parse config file '{path}': {source}")]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Runtime settings of the gateway binary. Every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Socket address to listen on.
    pub bind_addr: String,

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,

    /// Load the Stake Engine demo brain at start-up.
    pub seed_demo: bool,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            seed_demo: false,
        }
    }
}

impl GatewayConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text).map_err(|source| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from `path` when given, otherwise use the defaults.
    pub fn load_optional(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = GatewayConfig::from_toml_str("").unwrap();
        assert_eq!(config, GatewayConfig::default());
        assert_eq!(config.bind_addr, "127.0.0.1:8787");
        assert_eq!(config.log_filter, "info");
        assert!(!config.seed_demo);
    }

    #[test]
    fn test_partial_toml() {
        let config = GatewayConfig::from_toml_str(
            r#"
            bind_addr = "0.0.0.0:9000"
            seed_demo = true
            "#,
        )
        .unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:9000");
        assert_eq!(config.log_filter, "info");
        assert!(config.seed_demo);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(GatewayConfig::from_toml_str("seed_demo = \"yes\"").is_err());
    }

    #[test]
    fn test_missing_file_names_path() {
        let err = GatewayConfig::load("/definitely/not/here/gateway.toml").unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
        assert!(err.to_string().contains("/definitely/not/here/gateway.toml"));
    }

    #[test]
    fn test_load_optional_without_path() {
        assert_eq!(
            GatewayConfig::load_optional(None).unwrap(),
            GatewayConfig::default()
        );
    }
}
