use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::field_type::{FieldKind, FieldType};
use super::validators::ValidatorRules;
use super::SchemaError;
use crate::error_handling::RegexUtils;
use crate::schema::patch::{check_patch, merge_patch};

fn empty_object() -> Value {
    Value::Object(Map::new())
}

/// `first_name` -> `First name`
pub(crate) fn humanize_key(key: &str) -> String {
    let words = key.replace('_', " ");
    let words = words.trim();
    let mut chars = words.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// A field definition as stored in `field_defs`.
///
/// `schema` and `validators` are kept as raw JSON; interpreting them is the
/// job of [`TypedField`](crate::schema_interpreter::TypedField).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(default, alias = "directoryId")]
    pub directory_id: Option<Uuid>,
    pub key: String,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Stored category; derived from `field_type` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<FieldKind>,
    #[serde(default = "empty_object")]
    pub schema: Value,
    #[serde(default = "empty_object")]
    pub validators: Value,
    #[serde(default)]
    pub required: bool,
    #[serde(default, alias = "readRoles")]
    pub read_roles: Vec<String>,
    #[serde(default, alias = "writeRoles")]
    pub write_roles: Vec<String>,
    #[serde(default, alias = "sortOrder")]
    pub sort_order: i32,
}

impl FieldDefinition {
    #[must_use]
    pub fn new(key: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            id: Uuid::new_v4(),
            directory_id: None,
            key: key.into(),
            label: String::new(),
            field_type,
            kind: None,
            schema: empty_object(),
            validators: empty_object(),
            required: false,
            read_roles: Vec::new(),
            write_roles: Vec::new(),
            sort_order: 0,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    #[must_use]
    pub fn with_schema(mut self, schema: Value) -> Self {
        self.schema = schema;
        self
    }

    #[must_use]
    pub fn with_validators(mut self, validators: Value) -> Self {
        self.validators = validators;
        self
    }

    #[must_use]
    pub const fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    #[must_use]
    pub fn with_roles(mut self, read_roles: Vec<String>, write_roles: Vec<String>) -> Self {
        self.read_roles = read_roles;
        self.write_roles = write_roles;
        self
    }

    /// The kind implied by the field type.
    #[must_use]
    pub const fn expected_kind(&self) -> FieldKind {
        self.field_type.kind()
    }

    /// `label`, or the key turned into words when no label is stored.
    #[must_use]
    pub fn display_label(&self) -> String {
        if self.label.trim().is_empty() {
            humanize_key(&self.key)
        } else {
            self.label.trim().to_string()
        }
    }

    /// Parses the `validators` column. `null` means no rules.
    pub fn validator_rules(&self) -> Result<ValidatorRules, String> {
        if self.validators.is_null() {
            return Ok(ValidatorRules::default());
        }
        let rules: ValidatorRules =
            serde_json::from_value(self.validators.clone()).map_err(|e| e.to_string())?;
        rules.check()?;
        Ok(rules)
    }

    /// Checks the key is a valid identifier.
    pub fn check_key(&self) -> Result<(), SchemaError> {
        if RegexUtils::is_identifier(&self.key)? {
            Ok(())
        } else {
            Err(SchemaError::InvalidField(format!(
                "Field key '{}' must start with a letter or underscore and contain only letters, digits and underscores",
                self.key
            )))
        }
    }

    /// Merges `patch` into `schema`. Keys the patch does not mention are
    /// kept; `null` removes a key.
    pub fn patch_schema(&mut self, patch: &Value) -> Result<(), SchemaError> {
        merge_patch(&mut self.schema, patch)
    }

    /// Merges `patch` into `validators` with the same rules as
    /// [`patch_schema`](Self::patch_schema).
    pub fn patch_validators(&mut self, patch: &Value) -> Result<(), SchemaError> {
        let mut merged = self.validators.clone();
        merge_patch(&mut merged, patch)?;
        let rules: ValidatorRules = serde_json::from_value(merged.clone())
            .map_err(|e| SchemaError::InvalidPatch(format!("validators: {e}")))?;
        rules.check().map_err(SchemaError::InvalidPatch)?;
        self.validators = merged;
        Ok(())
    }

    /// Applies an admin update in place. Definitions are not versioned.
    pub fn apply_update(&mut self, update: FieldUpdate) -> Result<(), SchemaError> {
        if let Some(schema) = &update.schema {
            check_patch(schema)?;
        }
        if let Some(validators) = &update.validators {
            self.patch_validators(validators)?;
        }
        if let Some(schema) = &update.schema {
            self.patch_schema(schema)?;
        }
        if let Some(label) = update.label {
            self.label = label;
        }
        if let Some(required) = update.required {
            self.required = required;
        }
        if let Some(read_roles) = update.read_roles {
            self.read_roles = read_roles;
        }
        if let Some(write_roles) = update.write_roles {
            self.write_roles = write_roles;
        }
        if let Some(sort_order) = update.sort_order {
            self.sort_order = sort_order;
        }
        Ok(())
    }
}

/// Partial update of a field definition. `schema` and `validators` are
/// merge patches, everything else replaces.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldUpdate {
    pub label: Option<String>,
    pub required: Option<bool>,
    pub schema: Option<Value>,
    pub validators: Option<Value>,
    pub read_roles: Option<Vec<String>>,
    pub write_roles: Option<Vec<String>>,
    pub sort_order: Option<i32>,
}
