use serde::{Deserialize, Serialize};

use super::encoding::EncodingConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::transport::TransportConfig;
use crate::domain_name::LabelPolicy;

const LOCAL_CONFIG_FILE: &str = "ferrous-doh.toml";

/// Main configuration structure for Ferrous DoH
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// DoH endpoint and timeouts
    #[serde(default)]
    pub transport: TransportConfig,

    /// Name encoding rules
    #[serde(default)]
    pub encoding: EncodingConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-doh.toml in current directory
    /// 3. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_FILE).exists() {
            Self::from_file(LOCAL_CONFIG_FILE)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(endpoint) = overrides.endpoint {
            self.transport.endpoint = endpoint;
        }
        if let Some(timeout) = overrides.timeout {
            self.transport.timeout = timeout;
        }
        if overrides.strict_labels {
            self.encoding.label_policy = LabelPolicy::Rfc1035;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = self.transport.endpoint.as_str();

        if !endpoint.starts_with("https://") {
            let plain_http = endpoint.starts_with("http://");
            if !(plain_http && self.transport.allow_insecure) {
                return Err(ConfigError::Validation(format!(
                    "DoH endpoint must be an https:// URL, got '{}'",
                    endpoint
                )));
            }
        }

        if endpoint.contains('?') {
            return Err(ConfigError::Validation(format!(
                "DoH endpoint must not carry a query string, got '{}'",
                endpoint
            )));
        }

        if self.transport.timeout == 0 {
            return Err(ConfigError::Validation(
                "Transport timeout cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub endpoint: Option<String>,
    pub timeout: Option<u64>,
    pub strict_labels: bool,
    pub log_level: Option<String>,
}
