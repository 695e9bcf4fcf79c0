//! Field schema interpreter: turns stored field definitions into value
//! validation and UI render descriptors.
//!
//! A [`FieldDefinition`](crate::schema::types::FieldDefinition) is parsed
//! into a [`TypedField`], whose configuration is a [`FieldConfig`]
//! variant matching the field type. The typed field then validates values
//! and describes itself for rendering. [`FieldInterpreter`] bundles both
//! steps together with the interpreter settings and adds the
//! directory-wide operations.

mod diagnostics;
mod error;
mod form;
mod interpreter;
mod render;
mod types;
mod validator;

pub use diagnostics::FieldDiagnostic;
pub use error::{ValidationError, ValidationErrorKind};
pub use form::RecordReport;
pub use interpreter::FieldInterpreter;
pub use render::{RenderConstraints, RenderOption, RenderSpec, Widget};
pub use types::{CompiledRules, TypedField};

pub use crate::schema::types::FieldConfig;
use crate::schema::types::SchemaError;

/// Result type for schema interpretation operations
pub type Result<T> = std::result::Result<T, SchemaError>;
