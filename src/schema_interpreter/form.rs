//! Directory-wide operations: whole records and whole forms.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

use super::error::ValidationError;
use super::interpreter::FieldInterpreter;
use super::render::RenderSpec;
use super::types::TypedField;
use crate::schema::directory::DirectoryDefinition;

/// Outcome of validating one record against a directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordReport {
    /// First error per field key
    pub errors: BTreeMap<String, ValidationError>,
    /// Record keys the directory does not define
    pub unknown_keys: Vec<String>,
}

impl RecordReport {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty() && self.unknown_keys.is_empty()
    }

    #[must_use]
    pub fn error_for(&self, key: &str) -> Option<&ValidationError> {
        self.errors.get(key)
    }
}

impl FieldInterpreter {
    /// Validates every field of `directory` against `record`.
    ///
    /// Fields missing from the record are validated as absent.
    ///
    /// # Errors
    /// Returns a `ValidationError` only when `record` is not a JSON object;
    /// per-field failures are collected in the report.
    pub fn validate_record(
        &self,
        directory: &DirectoryDefinition,
        record: &Value,
    ) -> Result<RecordReport, ValidationError> {
        let values = record.as_object().ok_or_else(|| {
            ValidationError::type_mismatch(&directory.slug, "a record must be a JSON object")
        })?;

        let mut report = RecordReport::default();
        for definition in directory.fields() {
            let value = values.get(&definition.key).unwrap_or(&Value::Null);
            if let Err(err) = self.validate(definition, value) {
                report.errors.insert(definition.key.clone(), err);
            }
        }
        report.unknown_keys = values
            .keys()
            .filter(|key| directory.field(key).is_none())
            .cloned()
            .collect();

        crate::log_validation_debug!(
            "Record for '{}': {} errors, {} unknown keys",
            directory.slug,
            report.errors.len(),
            report.unknown_keys.len()
        );
        Ok(report)
    }

    /// Render descriptors for every field, in display order.
    #[must_use]
    pub fn describe_form(&self, directory: &DirectoryDefinition) -> Vec<RenderSpec> {
        directory
            .fields()
            .iter()
            .map(|definition| TypedField::lenient(definition).describe(self.config()))
            .collect()
    }
}
