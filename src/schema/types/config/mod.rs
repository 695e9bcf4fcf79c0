//! Typed, per-type field configuration.
//!
//! The `schema` column of a field definition is a free-form JSON object.
//! [`parse_field_config`] turns it into a [`FieldConfig`] variant matching
//! the field's [`FieldType`]. A configuration may be nested under its
//! configuration key (`{"skillsConfig": {...}}`) or stored flat at the top
//! level of `schema`. Anything missing or malformed degrades to the type's
//! default configuration and is reported as a [`ConfigIssue`].

pub mod choice;
pub mod numeric;
pub mod relation;
pub mod skills;
pub mod text;
pub mod verification;

pub use choice::{ChoiceOption, SelectConfig, TagsConfig};
pub use numeric::{CurrencyConfig, NumberConfig, RatingConfig};
pub use relation::RelationConfig;
pub use skills::{CustomSkill, SkillsConfig};
pub use text::{SocidConfig, TextConfig};
pub use verification::{OtherVerificationConfig, VerificationField, VerificationSlot};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeSet, HashSet};
use std::fmt;

use super::field_type::{FieldKind, FieldType};

/// Implemented by every typed configuration payload.
pub trait TypeConfig: DeserializeOwned + Default {
    /// Top-level keys that identify a flat (un-nested) configuration.
    const FIELDS: &'static [&'static str];

    /// Semantic checks that serde cannot express.
    fn check(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Where the configuration in use came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigSource {
    /// Parsed from the stored `schema`
    Stored,
    /// The type's built-in default
    Default,
}

/// A problem found in a stored field definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum ConfigIssue {
    MissingConfig { expected: String },
    MalformedConfig { key: String, reason: String },
    ForeignConfig { key: String },
    KindMismatch { declared: FieldKind, expected: FieldKind },
    InvalidValidators { reason: String },
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingConfig { expected } => write!(f, "missing {expected}"),
            Self::MalformedConfig { key, reason } => write!(f, "malformed {key}: {reason}"),
            Self::ForeignConfig { key } => {
                write!(f, "{key} belongs to a different field type")
            }
            Self::KindMismatch { declared, expected } => {
                write!(f, "kind is {declared} but the type implies {expected}")
            }
            Self::InvalidValidators { reason } => write!(f, "invalid validators: {reason}"),
        }
    }
}

/// Type-specific configuration, one variant per field type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "config", rename_all = "snake_case")]
pub enum FieldConfig {
    /// Shared by `text` and `textarea`
    Text(TextConfig),
    Email,
    Number(NumberConfig),
    Currency(CurrencyConfig),
    Rating(RatingConfig),
    Boolean,
    Date,
    Select(SelectConfig),
    Socid(SocidConfig),
    Tags(TagsConfig),
    Skills(SkillsConfig),
    OtherVerification(OtherVerificationConfig),
    Relation(RelationConfig),
}

/// Result of reading a stored `schema` for one field type.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedConfig {
    pub config: FieldConfig,
    pub source: ConfigSource,
    pub issues: Vec<ConfigIssue>,
}

/// Reads the configuration `field_type` expects out of `schema`.
///
/// Never fails: every problem is recorded in [`ParsedConfig::issues`] and the
/// type's default configuration is used in its place.
#[must_use]
pub fn parse_field_config(field_type: FieldType, schema: &Value) -> ParsedConfig {
    let mut issues = foreign_config_keys(field_type, schema)
        .into_iter()
        .map(|key| ConfigIssue::ForeignConfig { key })
        .collect::<Vec<_>>();

    let key = field_type.config_key().unwrap_or_default();
    let (config, source) = match field_type {
        FieldType::Text | FieldType::Textarea => {
            load(key, schema, &mut issues).map_config(FieldConfig::Text)
        }
        FieldType::Number => load(key, schema, &mut issues).map_config(FieldConfig::Number),
        FieldType::Currency => load(key, schema, &mut issues).map_config(FieldConfig::Currency),
        FieldType::Rating => load(key, schema, &mut issues).map_config(FieldConfig::Rating),
        FieldType::Select => load(key, schema, &mut issues).map_config(FieldConfig::Select),
        FieldType::Socid => load(key, schema, &mut issues).map_config(FieldConfig::Socid),
        FieldType::Tags => load(key, schema, &mut issues).map_config(FieldConfig::Tags),
        FieldType::Skills => load(key, schema, &mut issues).map_config(FieldConfig::Skills),
        FieldType::OtherVerification => {
            load(key, schema, &mut issues).map_config(FieldConfig::OtherVerification)
        }
        FieldType::Relation => load(key, schema, &mut issues).map_config(FieldConfig::Relation),
        FieldType::Email => (FieldConfig::Email, ConfigSource::Stored),
        FieldType::Boolean => (FieldConfig::Boolean, ConfigSource::Stored),
        FieldType::Date => (FieldConfig::Date, ConfigSource::Stored),
    };

    let malformed = issues
        .iter()
        .any(|issue| matches!(issue, ConfigIssue::MalformedConfig { .. }));
    if field_type.expects_config() && source == ConfigSource::Default && !malformed {
        issues.push(ConfigIssue::MissingConfig {
            expected: key.to_string(),
        });
    }

    ParsedConfig {
        config,
        source,
        issues,
    }
}

struct Loaded<C>(C, ConfigSource);

impl<C> Loaded<C> {
    fn map_config(self, wrap: impl FnOnce(C) -> FieldConfig) -> (FieldConfig, ConfigSource) {
        (wrap(self.0), self.1)
    }
}

fn load<C: TypeConfig>(key: &str, schema: &Value, issues: &mut Vec<ConfigIssue>) -> Loaded<C> {
    let Some(raw) = locate(schema, key, C::FIELDS) else {
        return Loaded(C::default(), ConfigSource::Default);
    };

    let parsed = serde_json::from_value::<C>(raw.clone())
        .map_err(|e| e.to_string())
        .and_then(|config| config.check().map(|()| config));

    match parsed {
        Ok(config) => Loaded(config, ConfigSource::Stored),
        Err(reason) => {
            issues.push(ConfigIssue::MalformedConfig {
                key: key.to_string(),
                reason,
            });
            Loaded(C::default(), ConfigSource::Default)
        }
    }
}

fn locate<'a>(schema: &'a Value, key: &str, fields: &[&str]) -> Option<&'a Value> {
    let object = schema.as_object()?;
    if let Some(nested) = object.get(key) {
        return (!nested.is_null()).then_some(nested);
    }
    fields
        .iter()
        .any(|field| object.contains_key(*field))
        .then_some(schema)
}

fn foreign_config_keys(field_type: FieldType, schema: &Value) -> BTreeSet<String> {
    let Some(object) = schema.as_object() else {
        return BTreeSet::new();
    };
    let own = field_type.config_key();
    FieldType::ALL
        .into_iter()
        .filter_map(FieldType::config_key)
        .filter(|key| Some(*key) != own && object.contains_key(*key))
        .map(str::to_string)
        .collect()
}

/// Trims, drops empties and removes duplicates keeping the first occurrence.
pub(crate) fn dedup_preserving_order<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .map(|item| item.as_ref().trim().to_string())
        .filter(|item| !item.is_empty() && seen.insert(item.clone()))
        .collect()
}
