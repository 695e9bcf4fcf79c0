//! # Field Schema Library
//!
//! Runtime interpretation of the field definitions behind a no-code
//! application builder. A directory is a record collection whose columns
//! are described by stored field definitions: a type tag, a JSON
//! configuration blob, generic validation rules and a required flag. This
//! crate decides how a value for such a field is validated and how the
//! field is rendered.
//!
//! ## Core Components
//!
//! * `schema` - Field and directory definitions, JSON merge patching
//! * `schema_interpreter` - Typed field model, value validation, render descriptors
//! * `permissions` - Role-based field access
//! * `config` - Interpreter settings
//! * `logging` - Feature-targeted logging on top of `env_logger`
//! * `error` - Crate-level error type
//!
//! ## Example
//!
//! ```
//! use field_schema::{FieldDefinition, FieldInterpreter, FieldType};
//! use serde_json::json;
//!
//! let field = FieldDefinition::new("skills", FieldType::Skills)
//!     .with_schema(json!({"skillsConfig": {"allowedCategories": ["A", "B"]}}));
//! let interpreter = FieldInterpreter::new();
//!
//! assert!(interpreter.validate(&field, &json!([{"category": "A"}])).is_ok());
//! assert!(interpreter.validate(&field, &json!([{"category": "C"}])).is_err());
//! ```

pub mod config;
pub mod error;
pub mod error_handling;
pub mod logging;
pub mod permissions;
pub mod schema;
pub mod schema_interpreter;
pub mod testing;

// Re-export main types for convenience
pub use config::{ConfigError, InterpreterConfig, MissingConfigPolicy};
pub use error::{StudioError, StudioResult};
pub use logging::{LogConfig, LoggingSystem};
pub use permissions::{PermissionManager, PermissionWrapper};
pub use schema::directory::DirectoryDefinition;
pub use schema::types::{FieldDefinition, FieldKind, FieldType, FieldUpdate, SchemaError};
pub use schema_interpreter::{
    FieldInterpreter, RecordReport, RenderSpec, TypedField, ValidationError, ValidationErrorKind,
};
