use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Why a value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ValidationErrorKind {
    /// Required field is absent or empty
    MissingRequiredValue,
    /// Value does not match a pattern or format
    PatternMismatch,
    /// Number, length or count outside its bounds
    OutOfRange,
    /// The field definition itself is unusable
    InvalidSchemaConfig,
    /// Value has the wrong JSON shape for the field type
    TypeMismatch,
    /// Value references an option outside the configured set
    OptionNotAllowed,
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::MissingRequiredValue => "missing required value",
            Self::PatternMismatch => "pattern mismatch",
            Self::OutOfRange => "out of range",
            Self::InvalidSchemaConfig => "invalid schema config",
            Self::TypeMismatch => "type mismatch",
            Self::OptionNotAllowed => "option not allowed",
        };
        f.write_str(name)
    }
}

/// A rejected value, returned to the caller rather than raised.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("field '{field}' ({kind}): {message}")]
pub struct ValidationError {
    pub field: String,
    pub kind: ValidationErrorKind,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &str, kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            kind,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn missing_required(field: &str) -> Self {
        Self::new(field, ValidationErrorKind::MissingRequiredValue, "a value is required")
    }

    pub fn pattern_mismatch(field: &str, message: impl Into<String>) -> Self {
        Self::new(field, ValidationErrorKind::PatternMismatch, message)
    }

    pub fn out_of_range(field: &str, message: impl Into<String>) -> Self {
        Self::new(field, ValidationErrorKind::OutOfRange, message)
    }

    pub fn invalid_config(field: &str, message: impl Into<String>) -> Self {
        Self::new(field, ValidationErrorKind::InvalidSchemaConfig, message)
    }

    pub fn type_mismatch(field: &str, message: impl Into<String>) -> Self {
        Self::new(field, ValidationErrorKind::TypeMismatch, message)
    }

    pub fn option_not_allowed(field: &str, message: impl Into<String>) -> Self {
        Self::new(field, ValidationErrorKind::OptionNotAllowed, message)
    }
}
