use serde_json::{Map, Value};

use super::permission_manager::PermissionManager;
use super::types::{AccessLevel, FieldPermissionResult};
use crate::error::{StudioError, StudioResult};
use crate::schema::directory::DirectoryDefinition;
use crate::schema::types::FieldDefinition;
use crate::schema_interpreter::FieldInterpreter;

/// Applies field access rules on top of the interpreter.
#[derive(Debug, Clone, Default)]
pub struct PermissionWrapper {
    permission_manager: PermissionManager,
    interpreter: FieldInterpreter,
}

impl PermissionWrapper {
    /// Builds a wrapper whose administrator role comes from the
    /// interpreter's settings.
    #[must_use]
    pub fn new(interpreter: FieldInterpreter) -> Self {
        Self {
            permission_manager: PermissionManager::from_config(interpreter.config()),
            interpreter,
        }
    }

    #[must_use]
    pub const fn permission_manager(&self) -> &PermissionManager {
        &self.permission_manager
    }

    /// Checks write access, then validates `value`.
    ///
    /// # Errors
    /// `StudioError::Permission` when the roles lack write access,
    /// `StudioError::Validation` when the value is rejected.
    pub fn check_write<R: AsRef<str>>(
        &self,
        roles: &[R],
        field: &FieldDefinition,
        value: &Value,
    ) -> StudioResult<()> {
        if !self.permission_manager.has_write_permission(roles, field) {
            return Err(StudioError::Permission(format!(
                "write access to field '{}' denied",
                field.key
            )));
        }
        self.interpreter.validate(field, value)?;
        Ok(())
    }

    /// Access decision for every field of `directory`.
    #[must_use]
    pub fn check_fields<R: AsRef<str>>(
        &self,
        roles: &[R],
        directory: &DirectoryDefinition,
        access: AccessLevel,
    ) -> Vec<FieldPermissionResult> {
        directory
            .fields()
            .iter()
            .map(|field| FieldPermissionResult {
                field_key: field.key.clone(),
                access,
                allowed: self.permission_manager.check(roles, field, access),
            })
            .collect()
    }

    /// Copy of `record` holding only the fields `roles` may read. Keys the
    /// directory does not define are dropped.
    ///
    /// # Errors
    /// `StudioError::Schema` when `record` is not a JSON object.
    pub fn readable_record<R: AsRef<str>>(
        &self,
        roles: &[R],
        directory: &DirectoryDefinition,
        record: &Value,
    ) -> StudioResult<Value> {
        let values = record.as_object().ok_or_else(|| {
            crate::schema::types::SchemaError::InvalidField(format!(
                "record for '{}' must be a JSON object",
                directory.slug
            ))
        })?;

        let visible: Map<String, Value> = values
            .iter()
            .filter(|(key, _)| {
                directory
                    .field(key)
                    .is_some_and(|field| self.permission_manager.has_read_permission(roles, field))
            })
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        Ok(Value::Object(visible))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::types::FieldType;
    use serde_json::json;

    fn directory() -> DirectoryDefinition {
        let mut directory = DirectoryDefinition::new("Staff", "staff").unwrap();
        directory
            .add_field(FieldDefinition::new("name", FieldType::Text).with_required(true))
            .unwrap();
        directory
            .add_field(
                FieldDefinition::new("salary", FieldType::Number)
                    .with_roles(vec!["hr".into()], vec!["hr".into()]),
            )
            .unwrap();
        directory
    }

    #[test]
    fn test_check_write() {
        let wrapper = PermissionWrapper::default();
        let directory = directory();
        let salary = directory.field("salary").unwrap();

        assert!(matches!(
            wrapper.check_write(&["viewer"], salary, &json!(10)),
            Err(StudioError::Permission(_))
        ));
        assert!(wrapper.check_write(&["hr"], salary, &json!(10)).is_ok());
        assert!(matches!(
            wrapper.check_write(&["hr"], salary, &json!("ten")),
            Err(StudioError::Validation(_))
        ));
    }

    #[test]
    fn test_readable_record() {
        let wrapper = PermissionWrapper::default();
        let record = json!({"name": "Ada", "salary": 10, "extra": true});
        let visible = wrapper
            .readable_record(&["viewer"], &directory(), &record)
            .unwrap();
        assert_eq!(visible, json!({"name": "Ada"}));
    }

    #[test]
    fn test_check_fields() {
        let wrapper = PermissionWrapper::default();
        let results = wrapper.check_fields(&["viewer"], &directory(), AccessLevel::Write);
        let allowed: Vec<_> = results.iter().map(|r| (r.field_key.as_str(), r.allowed)).collect();
        assert_eq!(allowed, vec![("name", true), ("salary", false)]);
    }
}
