use thiserror::Error;

/// Errors raised while building, loading or mutating field and directory
/// definitions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid field: {0}")]
    InvalidField(String),
    #[error("Invalid schema config: {0}")]
    InvalidSchemaConfig(String),
    #[error("Duplicate field key: {0}")]
    DuplicateKey(String),
    #[error("Invalid patch: {0}")]
    InvalidPatch(String),
    #[error("Invalid directory: {0}")]
    InvalidDirectory(String),
}
