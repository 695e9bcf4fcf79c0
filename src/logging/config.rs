//! Configuration management for the logging system
//!
//! Loaded from a TOML file, then overridden from the environment.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::config::ConfigError;

/// Main logging configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// General logging settings
    pub general: GeneralConfig,
    /// Feature-specific log levels, keyed by feature name
    pub features: HashMap<String, String>,
}

/// General logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default log level for all modules
    pub default_level: String,
    /// Enable colored output
    pub enable_colors: bool,
    /// Include timestamps
    pub include_timestamp: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_level: "INFO".to_string(),
            enable_colors: true,
            include_timestamp: true,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            features: Self::default_features(),
        }
    }
}

impl LogConfig {
    /// Environment variable overriding `general.default_level`
    pub const LEVEL_ENV: &'static str = "FIELD_SCHEMA_LOG_LEVEL";

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut config = Self::from_toml_str(&content)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Default configuration with `FIELD_SCHEMA_LOG_LEVEL` applied
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) {
        if let Ok(level) = std::env::var(Self::LEVEL_ENV) {
            if super::parse_level(&level).is_some() {
                self.general.default_level = level.to_uppercase();
            }
        }
    }

    /// Validate every configured level
    pub fn validate(&self) -> Result<(), ConfigError> {
        if super::parse_level(&self.general.default_level).is_none() {
            return Err(ConfigError::Invalid(format!(
                "Invalid default log level: {}",
                self.general.default_level
            )));
        }
        for (feature, level) in &self.features {
            if super::parse_level(level).is_none() {
                return Err(ConfigError::Invalid(format!(
                    "Invalid log level for feature {feature}: {level}"
                )));
            }
        }
        Ok(())
    }

    fn default_features() -> HashMap<String, String> {
        let mut features = HashMap::new();
        features.insert("schema".to_string(), "INFO".to_string());
        features.insert("validation".to_string(), "WARN".to_string());
        features.insert("render".to_string(), "WARN".to_string());
        features.insert("permissions".to_string(), "INFO".to_string());
        features.insert("directory".to_string(), "INFO".to_string());
        features
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(LogConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml() {
        let config = LogConfig::from_toml_str(
            r#"
            [general]
            default_level = "DEBUG"

            [features]
            validation = "TRACE"
            "#,
        )
        .unwrap();
        assert_eq!(config.general.default_level, "DEBUG");
        assert!(config.general.enable_colors);
        assert_eq!(config.features.get("validation").unwrap(), "TRACE");
    }

    #[test]
    fn test_invalid_level_rejected() {
        let result = LogConfig::from_toml_str(
            r#"
            [features]
            render = "LOUD"
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }
}
