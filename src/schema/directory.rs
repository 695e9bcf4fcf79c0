use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use uuid::Uuid;

use super::types::{FieldDefinition, FieldUpdate, SchemaError};
use crate::error_handling::RegexUtils;

/// A named record collection (`directory_defs`) and its ordered fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryDefinition {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    fields: Vec<FieldDefinition>,
}

impl DirectoryDefinition {
    pub fn new(title: impl Into<String>, slug: impl Into<String>) -> Result<Self, SchemaError> {
        let directory = Self {
            id: Uuid::new_v4(),
            title: title.into(),
            slug: slug.into(),
            fields: Vec::new(),
        };
        directory.check()?;
        Ok(directory)
    }

    /// Loads a directory (with its fields) from JSON, orders the fields and
    /// checks every invariant.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let mut directory: Self = serde_json::from_str(json)
            .map_err(|e| SchemaError::InvalidDirectory(format!("Invalid directory JSON: {e}")))?;
        directory.fields.sort_by_key(|f| f.sort_order);
        directory.check()?;
        Ok(directory)
    }

    /// Checks title, slug, field keys and key uniqueness.
    pub fn check(&self) -> Result<(), SchemaError> {
        if self.title.trim().is_empty() {
            return Err(SchemaError::InvalidDirectory(
                "Directory title cannot be empty".to_string(),
            ));
        }
        if !RegexUtils::slug()?.is_match(&self.slug) {
            return Err(SchemaError::InvalidDirectory(format!(
                "Directory slug '{}' must be lowercase words separated by '-' or '_'",
                self.slug
            )));
        }

        let mut keys = HashSet::new();
        for field in &self.fields {
            field.check_key()?;
            if !keys.insert(field.key.as_str()) {
                return Err(SchemaError::DuplicateKey(field.key.clone()));
            }
            if field.directory_id.is_some_and(|id| id != self.id) {
                return Err(SchemaError::InvalidDirectory(format!(
                    "Field '{}' belongs to another directory",
                    field.key
                )));
            }
        }
        Ok(())
    }

    /// Fields in display order.
    #[must_use]
    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    #[must_use]
    pub fn field(&self, key: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.key == key)
    }

    #[must_use]
    pub fn field_by_id(&self, id: Uuid) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// Appends a field after the current last one.
    pub fn add_field(
        &mut self,
        mut field: FieldDefinition,
    ) -> Result<&FieldDefinition, SchemaError> {
        field.check_key()?;
        if self.field(&field.key).is_some() {
            crate::log_directory_warn!(
                "Field key '{}' already exists in directory '{}'",
                field.key,
                self.slug
            );
            return Err(SchemaError::DuplicateKey(field.key));
        }
        field.sort_order = match self.fields.iter().map(|f| f.sort_order).max() {
            None => 0,
            Some(max) => max.checked_add(1).ok_or_else(|| {
                SchemaError::InvalidDirectory(format!(
                    "No sort order left after {max} in directory '{}'",
                    self.slug
                ))
            })?,
        };
        field.directory_id = Some(self.id);

        crate::log_directory_info!(
            "Adding field '{}' ({}) to directory '{}'",
            field.key,
            field.field_type,
            self.slug
        );
        self.fields.push(field);
        Ok(&self.fields[self.fields.len() - 1])
    }

    pub fn remove_field(&mut self, key: &str) -> Result<FieldDefinition, SchemaError> {
        let index = self.index_of(key)?;
        crate::log_directory_info!("Removing field '{}' from directory '{}'", key, self.slug);
        Ok(self.fields.remove(index))
    }

    /// Applies `update` to the field with `key`, keeping display order.
    pub fn update_field(
        &mut self,
        key: &str,
        update: FieldUpdate,
    ) -> Result<&FieldDefinition, SchemaError> {
        let index = self.index_of(key)?;
        self.fields[index].apply_update(update)?;
        let id = self.fields[index].id;
        self.fields.sort_by_key(|f| f.sort_order);
        crate::log_directory_info!("Updated field '{}' in directory '{}'", key, self.slug);
        self.field_by_id(id)
            .ok_or_else(|| SchemaError::NotFound(format!("Field '{key}'")))
    }

    /// Merges `patch` into the `schema` of the field with `key`.
    pub fn patch_field_schema(&mut self, key: &str, patch: &Value) -> Result<(), SchemaError> {
        let index = self.index_of(key)?;
        self.fields[index].patch_schema(patch)?;
        crate::log_directory_info!(
            "Patched schema of field '{}' in directory '{}'",
            key,
            self.slug
        );
        Ok(())
    }

    fn index_of(&self, key: &str) -> Result<usize, SchemaError> {
        self.fields
            .iter()
            .position(|f| f.key == key)
            .ok_or_else(|| {
                SchemaError::NotFound(format!("Field '{key}' in directory '{}'", self.slug))
            })
    }
}
