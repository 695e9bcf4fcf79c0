pub mod config;
pub mod errors;
pub mod field;
pub mod field_type;
pub mod validators;

pub use config::{ConfigIssue, ConfigSource, FieldConfig};
pub use errors::SchemaError;
pub use field::{FieldDefinition, FieldUpdate};
pub use field_type::{FieldKind, FieldType};
pub use validators::ValidatorRules;
