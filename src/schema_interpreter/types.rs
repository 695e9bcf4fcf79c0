use regex::Regex;
use serde_json::Value;

use super::error::ValidationError;
use super::render::RenderSpec;
use crate::config::InterpreterConfig;
use crate::error_handling::RegexUtils;
use crate::schema::types::config::{parse_field_config, ConfigIssue, ConfigSource, FieldConfig};
use crate::schema::types::{FieldDefinition, FieldKind, FieldType, SchemaError, ValidatorRules};

/// Generic validators with the pattern compiled.
#[derive(Debug, Clone, Default)]
pub struct CompiledRules {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<Regex>,
    pub pattern_message: Option<String>,
}

impl CompiledRules {
    #[must_use]
    pub fn pattern_source(&self) -> Option<&str> {
        self.pattern.as_ref().map(Regex::as_str)
    }
}

/// A field definition parsed into the typed model.
///
/// Built once per definition; `validate` and `describe` can then be called
/// any number of times without re-reading the JSON columns.
#[derive(Debug, Clone)]
pub struct TypedField {
    pub key: String,
    pub label: String,
    pub field_type: FieldType,
    pub kind: FieldKind,
    pub required: bool,
    pub config: FieldConfig,
    pub config_source: ConfigSource,
    pub rules: CompiledRules,
    pub read_roles: Vec<String>,
    pub write_roles: Vec<String>,
    /// Problems found in the stored definition; defaults were used instead
    pub issues: Vec<ConfigIssue>,
}

impl TypedField {
    /// Builds the typed field, honouring the configured
    /// [`MissingConfigPolicy`](crate::config::MissingConfigPolicy).
    ///
    /// # Errors
    /// Returns `SchemaError::InvalidSchemaConfig` in strict mode when the
    /// stored definition has any [`ConfigIssue`].
    pub fn from_definition(
        definition: &FieldDefinition,
        settings: &InterpreterConfig,
    ) -> Result<Self, SchemaError> {
        let field = Self::parse(definition);
        if settings.is_strict() {
            if let Some(issue) = field.issues.first() {
                return Err(SchemaError::InvalidSchemaConfig(format!(
                    "Field '{}' ({}): {issue}",
                    field.key, field.field_type
                )));
            }
        } else {
            field.warn_issues();
        }
        Ok(field)
    }

    /// Builds the typed field, always degrading to defaults.
    #[must_use]
    pub fn lenient(definition: &FieldDefinition) -> Self {
        let field = Self::parse(definition);
        field.warn_issues();
        field
    }

    pub(crate) fn parse(definition: &FieldDefinition) -> Self {
        let parsed = parse_field_config(definition.field_type, &definition.schema);
        let mut issues = parsed.issues;

        let expected = definition.expected_kind();
        if let Some(declared) = definition.kind {
            if declared != expected {
                issues.push(ConfigIssue::KindMismatch { declared, expected });
            }
        }

        let (rules, required_rule) = match definition.validator_rules() {
            Ok(rules) => {
                let required = rules.required == Some(true);
                let compiled = compile_rules(definition, rules, &mut issues);
                (compiled, required)
            }
            Err(reason) => {
                issues.push(ConfigIssue::InvalidValidators { reason });
                (CompiledRules::default(), false)
            }
        };

        Self {
            key: definition.key.clone(),
            label: definition.display_label(),
            field_type: definition.field_type,
            kind: expected,
            required: definition.required || required_rule,
            config: parsed.config,
            config_source: parsed.source,
            rules,
            read_roles: definition.read_roles.clone(),
            write_roles: definition.write_roles.clone(),
            issues,
        }
    }

    fn warn_issues(&self) {
        for issue in &self.issues {
            crate::log_schema_warn!(
                "Field '{}' ({}): {}; falling back to defaults",
                self.key,
                self.field_type,
                issue
            );
        }
    }

    /// Validates a candidate value. `Value::Null` stands for "absent".
    pub fn validate(
        &self,
        value: &Value,
        settings: &InterpreterConfig,
    ) -> Result<(), ValidationError> {
        super::validator::ValueValidator::new(self, settings).validate(value)
    }

    /// Builds the UI descriptor for this field.
    #[must_use]
    pub fn describe(&self, settings: &InterpreterConfig) -> RenderSpec {
        super::render::describe(self, settings)
    }
}

fn compile_rules(
    definition: &FieldDefinition,
    rules: ValidatorRules,
    issues: &mut Vec<ConfigIssue>,
) -> CompiledRules {
    let key = &definition.key;
    let numeric = definition.field_type.is_numeric();
    if !numeric && (rules.min.is_some() || rules.max.is_some()) {
        issues.push(ConfigIssue::InvalidValidators {
            reason: format!(
                "min/max only apply to numeric fields, not {}",
                definition.field_type
            ),
        });
    }

    let pattern = rules.pattern.as_deref().and_then(|pattern| {
        RegexUtils::compile_with_context(pattern, &format!("validators.pattern of '{key}'"))
            .map_err(|e| {
                issues.push(ConfigIssue::InvalidValidators {
                    reason: e.to_string(),
                })
            })
            .ok()
    });

    CompiledRules {
        min: rules.min.filter(|_| numeric),
        max: rules.max.filter(|_| numeric),
        min_length: rules.min_length,
        max_length: rules.max_length,
        pattern,
        pattern_message: rules.pattern_message,
    }
}
