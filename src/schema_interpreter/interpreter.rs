use serde_json::Value;
use std::path::Path;

use super::error::ValidationError;
use super::render::RenderSpec;
use super::types::TypedField;
use crate::config::InterpreterConfig;
use crate::schema::types::{FieldDefinition, SchemaError};

/// Interprets stored field definitions: validates candidate values and
/// describes how each field should be rendered.
#[derive(Debug, Clone, Default)]
pub struct FieldInterpreter {
    config: InterpreterConfig,
}

impl FieldInterpreter {
    /// Creates an interpreter with the default (fallback) settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_config(config: InterpreterConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    /// Parses a field definition into the typed model.
    ///
    /// # Errors
    /// Returns a `SchemaError` if:
    /// - The field key is not a valid identifier
    /// - The interpreter is strict and the stored configuration has problems
    pub fn interpret(
        &self,
        definition: &FieldDefinition,
    ) -> crate::schema_interpreter::Result<TypedField> {
        definition.check_key()?;
        TypedField::from_definition(definition, &self.config)
    }

    /// Interprets a field definition from a JSON string.
    ///
    /// # Errors
    /// Returns a `SchemaError` if:
    /// - The JSON string is invalid
    /// - The definition cannot be interpreted
    pub fn interpret_str(&self, json_str: &str) -> crate::schema_interpreter::Result<TypedField> {
        let definition: FieldDefinition = serde_json::from_str(json_str)
            .map_err(|e| SchemaError::InvalidField(format!("Invalid field definition: {e}")))?;
        self.interpret(&definition)
    }

    /// Interprets a field definition from a file.
    ///
    /// # Errors
    /// Returns a `SchemaError` if:
    /// - The file cannot be read
    /// - The file contains invalid JSON
    /// - The definition cannot be interpreted
    pub fn interpret_file<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> crate::schema_interpreter::Result<TypedField> {
        let json_str = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            SchemaError::InvalidField(format!(
                "Failed to read field definition {}: {e}",
                path.as_ref().display()
            ))
        })?;
        let field = self.interpret_str(&json_str)?;
        crate::log_schema_info!(
            "Loaded field '{}' ({}) from {}",
            field.key,
            field.field_type,
            path.as_ref().display()
        );
        Ok(field)
    }

    /// Validates `value` against `definition`.
    ///
    /// `Value::Null` stands for an absent value. Strict-mode configuration
    /// problems surface as
    /// [`ValidationErrorKind::InvalidSchemaConfig`](super::ValidationErrorKind).
    ///
    /// # Errors
    /// Returns the first rule the value breaks.
    pub fn validate(
        &self,
        definition: &FieldDefinition,
        value: &Value,
    ) -> Result<(), ValidationError> {
        let field = TypedField::from_definition(definition, &self.config).map_err(|e| {
            crate::log_validation_warn!("Cannot validate '{}': {}", definition.key, e);
            ValidationError::invalid_config(&definition.key, e.to_string())
        })?;
        field.validate(value, &self.config)
    }

    /// Describes how `definition` should be rendered.
    ///
    /// Never fails: configuration problems fall back to the type's defaults
    /// whatever the missing-config policy says.
    #[must_use]
    pub fn describe_for_render(&self, definition: &FieldDefinition) -> RenderSpec {
        TypedField::lenient(definition).describe(&self.config)
    }
}
