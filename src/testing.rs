// Re-export types needed for testing
pub use crate::config::{InterpreterConfig, MissingConfigPolicy};
pub use crate::permissions::{AccessLevel, PermissionManager, PermissionWrapper};
pub use crate::schema::directory::DirectoryDefinition;
pub use crate::schema::types::config::{
    ChoiceOption, CustomSkill, SelectConfig, SkillsConfig, VerificationField,
};
pub use crate::schema::types::{
    ConfigIssue, ConfigSource, FieldConfig, FieldDefinition, FieldKind, FieldType, FieldUpdate,
    SchemaError,
};
pub use crate::schema_interpreter::{
    FieldInterpreter, RecordReport, RenderSpec, TypedField, ValidationError, ValidationErrorKind,
    Widget,
};

use serde_json::{json, Value};

pub fn create_test_value(value: &str) -> Value {
    serde_json::from_str(value).unwrap()
}

pub fn create_test_field(key: &str, field_type: FieldType) -> FieldDefinition {
    FieldDefinition::new(key, field_type)
}

/// A `skills` field restricted to `categories`.
pub fn create_skills_field(key: &str, categories: &[&str]) -> FieldDefinition {
    FieldDefinition::new(key, FieldType::Skills)
        .with_schema(json!({"skillsConfig": {"allowedCategories": categories}}))
}

/// A directory with a required name, an email and a skills field.
pub fn create_test_directory() -> DirectoryDefinition {
    let mut directory = DirectoryDefinition::new("Candidates", "candidates").unwrap();
    directory
        .add_field(FieldDefinition::new("name", FieldType::Text).with_required(true))
        .unwrap();
    directory
        .add_field(FieldDefinition::new("email", FieldType::Email))
        .unwrap();
    directory
        .add_field(create_skills_field("skills", &["Engineering", "Design"]))
        .unwrap();
    directory
}
