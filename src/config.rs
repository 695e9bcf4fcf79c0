//! Interpreter configuration.
//!
//! Read from a TOML file and then overridden from the environment:
//!
//! ```toml
//! missing_config = "strict"
//! admin_role = "owner"
//! default_rating_max = 10
//! default_currency = "EUR"
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use thiserror::Error;

use crate::schema::types::config::numeric::MAX_CURRENCY_PRECISION;

/// What to do when a field's `schema` lacks, or garbles, the configuration
/// its type expects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingConfigPolicy {
    /// Use the type's default (unfiltered) configuration and log a warning
    #[default]
    Fallback,
    /// Reject the definition with `InvalidSchemaConfig`
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpreterConfig {
    pub missing_config: MissingConfigPolicy,
    /// Role that passes every read/write role check
    pub admin_role: String,
    pub default_rating_max: u32,
    /// ISO 4217 code used when a currency field names none
    pub default_currency: String,
    pub default_currency_precision: u32,
    /// Trim surrounding whitespace from strings before validating
    pub trim_strings: bool,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            missing_config: MissingConfigPolicy::Fallback,
            admin_role: "admin".to_string(),
            default_rating_max: 5,
            default_currency: "USD".to_string(),
            default_currency_precision: 2,
            trim_strings: true,
        }
    }
}

impl InterpreterConfig {
    pub const STRICT_ENV: &'static str = "FIELD_SCHEMA_STRICT";
    pub const ADMIN_ROLE_ENV: &'static str = "FIELD_SCHEMA_ADMIN_ROLE";
    pub const DEFAULT_CURRENCY_ENV: &'static str = "FIELD_SCHEMA_DEFAULT_CURRENCY";

    /// Strict-mode configuration with every other setting at its default.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            missing_config: MissingConfigPolicy::Strict,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_strict(&self) -> bool {
        self.missing_config == MissingConfigPolicy::Strict
    }

    /// Defaults overridden from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Load from a TOML file, then apply environment overrides.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut config = Self::from_toml_str(&content)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(strict) = env::var(Self::STRICT_ENV) {
            let strict: bool = strict.trim().parse().map_err(|_| {
                ConfigError::Invalid(format!("{} must be true or false", Self::STRICT_ENV))
            })?;
            self.missing_config = if strict {
                MissingConfigPolicy::Strict
            } else {
                MissingConfigPolicy::Fallback
            };
        }
        if let Ok(role) = env::var(Self::ADMIN_ROLE_ENV) {
            self.admin_role = role;
        }
        if let Ok(currency) = env::var(Self::DEFAULT_CURRENCY_ENV) {
            self.default_currency = currency.trim().to_uppercase();
        }
        self.validate()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.admin_role.trim().is_empty() {
            return Err(ConfigError::Invalid("admin_role cannot be empty".to_string()));
        }
        if self.default_rating_max == 0 {
            return Err(ConfigError::Invalid(
                "default_rating_max must be at least 1".to_string(),
            ));
        }
        if self.default_currency.len() != 3
            || !self.default_currency.chars().all(|c| c.is_ascii_uppercase())
        {
            return Err(ConfigError::Invalid(format!(
                "default_currency '{}' is not an ISO 4217 code",
                self.default_currency
            )));
        }
        if self.default_currency_precision > MAX_CURRENCY_PRECISION {
            return Err(ConfigError::Invalid(format!(
                "default_currency_precision cannot exceed {MAX_CURRENCY_PRECISION}"
            )));
        }
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = InterpreterConfig::default();
        assert_eq!(config.missing_config, MissingConfigPolicy::Fallback);
        assert_eq!(config.admin_role, "admin");
        assert!(config.validate().is_ok());
        assert!(InterpreterConfig::strict().is_strict());
    }

    #[test]
    fn test_from_toml_str() {
        let config = InterpreterConfig::from_toml_str(
            r#"
            missing_config = "strict"
            default_rating_max = 10
            "#,
        )
        .unwrap();
        assert!(config.is_strict());
        assert_eq!(config.default_rating_max, 10);
        assert_eq!(config.default_currency, "USD");
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            InterpreterConfig::from_toml_str("default_currency = \"dollars\""),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            InterpreterConfig::from_toml_str("missing_config = \"maybe\""),
            Err(ConfigError::Parse(_))
        ));
    }
}
