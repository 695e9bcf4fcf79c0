//! # Logging
//!
//! Thin layer over the `log` facade. Every feature logs under its own
//! target (see [`features::LogFeature`]) and [`LoggingSystem::init`]
//! installs `env_logger` with per-feature levels taken from [`LogConfig`].

pub mod config;
pub mod features;

pub use config::LogConfig;
use features::LogFeature;
use log::LevelFilter;
use std::io::Write;

/// Parses `TRACE`..`ERROR` (case-insensitive) and `OFF`.
#[must_use]
pub fn parse_level(level: &str) -> Option<LevelFilter> {
    match level.trim().to_uppercase().as_str() {
        "TRACE" => Some(LevelFilter::Trace),
        "DEBUG" => Some(LevelFilter::Debug),
        "INFO" => Some(LevelFilter::Info),
        "WARN" => Some(LevelFilter::Warn),
        "ERROR" => Some(LevelFilter::Error),
        "OFF" => Some(LevelFilter::Off),
        _ => None,
    }
}

pub struct LoggingSystem;

impl LoggingSystem {
    /// Initialize logging with default configuration
    pub fn init_default() -> Result<(), LoggingError> {
        Self::init(&LogConfig::default())
    }

    /// Installs the global logger. `RUST_LOG` still applies on top of the
    /// configured levels.
    pub fn init(config: &LogConfig) -> Result<(), LoggingError> {
        config
            .validate()
            .map_err(|e| LoggingError::Config(e.to_string()))?;
        Self::builder(config)
            .try_init()
            .map_err(|_| LoggingError::AlreadyInitialized)
    }

    fn builder(config: &LogConfig) -> env_logger::Builder {
        let mut builder = env_logger::Builder::new();
        builder.filter_level(
            parse_level(&config.general.default_level).unwrap_or(LevelFilter::Info),
        );

        for (name, level) in &config.features {
            match (LogFeature::from_name(name), parse_level(level)) {
                (Some(feature), Some(level)) => {
                    builder.filter_module(feature.target(), level);
                }
                _ => eprintln!("Ignoring log level '{level}' for unknown feature '{name}'"),
            }
        }

        builder.write_style(if config.general.enable_colors {
            env_logger::WriteStyle::Auto
        } else {
            env_logger::WriteStyle::Never
        });

        if !config.general.include_timestamp {
            builder.format(|buf, record| {
                writeln!(buf, "[{} {}] {}", record.level(), record.target(), record.args())
            });
        }

        builder.parse_env("RUST_LOG");
        builder
    }
}

/// Logging system errors
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Logging system already initialized")]
    AlreadyInitialized,
    #[error("Configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
        assert_eq!(parse_level(" WARN "), Some(LevelFilter::Warn));
        assert_eq!(parse_level("verbose"), None);
    }

    #[test]
    fn test_feature_names_round_trip() {
        for feature in LogFeature::ALL {
            assert_eq!(LogFeature::from_name(feature.name()), Some(feature));
            assert!(feature.target().starts_with("field_schema::"));
        }
    }
}
