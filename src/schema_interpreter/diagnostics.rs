use serde::Serialize;
use std::fmt;

use super::interpreter::FieldInterpreter;
use super::types::TypedField;
use crate::schema::directory::DirectoryDefinition;
use crate::schema::types::{ConfigIssue, FieldType};

/// A configuration problem in one field of a directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDiagnostic {
    pub key: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(flatten)]
    pub issue: ConfigIssue,
}

impl fmt::Display for FieldDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.key, self.field_type, self.issue)
    }
}

impl FieldInterpreter {
    /// Lists every configuration problem in `directory`, whatever the
    /// missing-config policy. An empty list means every field is
    /// configured the way its type expects.
    #[must_use]
    pub fn diagnose(&self, directory: &DirectoryDefinition) -> Vec<FieldDiagnostic> {
        let diagnostics: Vec<FieldDiagnostic> = directory
            .fields()
            .iter()
            .flat_map(|definition| {
                let field = TypedField::parse(definition);
                field.issues.into_iter().map(move |issue| FieldDiagnostic {
                    key: field.key.clone(),
                    field_type: field.field_type,
                    issue,
                })
            })
            .collect();

        for diagnostic in &diagnostics {
            crate::log_schema_debug!("Diagnostic for '{}': {}", directory.slug, diagnostic);
        }
        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::types::{FieldDefinition, FieldKind};
    use serde_json::json;

    #[test]
    fn test_diagnose_reports_each_problem() {
        let mut directory = DirectoryDefinition::new("Jobs", "jobs").unwrap();
        directory
            .add_field(FieldDefinition::new("skills", FieldType::Skills))
            .unwrap();
        directory
            .add_field(
                FieldDefinition::new("score", FieldType::Rating)
                    .with_schema(json!({"tagsConfig": {"suggestions": ["x"]}})),
            )
            .unwrap();
        let mut relation = FieldDefinition::new("owner", FieldType::Relation)
            .with_schema(json!({"relationConfig": {"directory": "people"}}));
        relation.kind = Some(FieldKind::Scalar);
        directory.add_field(relation).unwrap();
        directory
            .add_field(FieldDefinition::new("title", FieldType::Text))
            .unwrap();

        let diagnostics = FieldInterpreter::new().diagnose(&directory);
        let keys: Vec<_> = diagnostics.iter().map(|d| d.key.as_str()).collect();
        assert_eq!(keys, vec!["skills", "score", "owner"]);
        assert!(matches!(diagnostics[0].issue, ConfigIssue::MissingConfig { .. }));
        assert!(matches!(diagnostics[1].issue, ConfigIssue::ForeignConfig { .. }));
        assert!(matches!(diagnostics[2].issue, ConfigIssue::KindMismatch { .. }));
        assert!(diagnostics[0].to_string().starts_with("skills (skills):"));
    }

    #[test]
    fn test_diagnose_reports_range_on_text() {
        let mut directory = DirectoryDefinition::new("Jobs", "jobs").unwrap();
        directory
            .add_field(
                FieldDefinition::new("title", FieldType::Text)
                    .with_validators(json!({"min": 1, "max": 3})),
            )
            .unwrap();

        let diagnostics = FieldInterpreter::new().diagnose(&directory);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].key, "title");
        assert!(matches!(
            diagnostics[0].issue,
            ConfigIssue::InvalidValidators { .. }
        ));
    }
}
