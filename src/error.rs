use thiserror::Error;

use crate::config::ConfigError;
use crate::schema::types::SchemaError;
use crate::schema_interpreter::ValidationError;

/// Unified error type for the crate.
///
/// Library operations return their module's own error; this type lets
/// callers (the CLI, an API layer) compose them with `?`.
#[derive(Error, Debug)]
pub enum StudioError {
    /// Errors in field or directory definitions
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// A value rejected by a field definition
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Caller lacks a role required by the field
    #[error("Permission error: {0}")]
    Permission(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for operations that can result in a StudioError
pub type StudioResult<T> = Result<T, StudioError>;
