//! # Field and directory definitions
//!
//! * `types` - stored field definitions, field types and typed configuration
//! * `directory` - record collections owning an ordered set of fields
//! * `patch` - JSON merge patching of stored configuration

pub mod directory;
pub mod patch;
pub mod types;

pub use directory::DirectoryDefinition;
pub use patch::merge_patch;
pub use types::{
    ConfigIssue, ConfigSource, FieldConfig, FieldDefinition, FieldKind, FieldType, FieldUpdate,
    SchemaError, ValidatorRules,
};
