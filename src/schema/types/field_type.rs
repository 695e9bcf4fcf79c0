use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::SchemaError;

/// Broad category of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// A single value
    Scalar,
    /// Structured value (list or object) built from several parts
    Composite,
    /// Reference(s) to records in another directory
    Relation,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar => write!(f, "scalar"),
            Self::Composite => write!(f, "composite"),
            Self::Relation => write!(f, "relation"),
        }
    }
}

/// The fixed set of field type tags stored in `field_defs.type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Text,
    Textarea,
    Email,
    Number,
    Currency,
    Rating,
    Boolean,
    Date,
    Select,
    Socid,
    Tags,
    Skills,
    OtherVerification,
    Relation,
}

impl FieldType {
    pub const ALL: [Self; 14] = [
        Self::Text,
        Self::Textarea,
        Self::Email,
        Self::Number,
        Self::Currency,
        Self::Rating,
        Self::Boolean,
        Self::Date,
        Self::Select,
        Self::Socid,
        Self::Tags,
        Self::Skills,
        Self::OtherVerification,
        Self::Relation,
    ];

    /// Wire tag, as stored in the database.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Email => "email",
            Self::Number => "number",
            Self::Currency => "currency",
            Self::Rating => "rating",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::Select => "select",
            Self::Socid => "socid",
            Self::Tags => "tags",
            Self::Skills => "skills",
            Self::OtherVerification => "other_verification",
            Self::Relation => "relation",
        }
    }

    #[must_use]
    pub const fn kind(self) -> FieldKind {
        match self {
            Self::Tags | Self::Skills | Self::OtherVerification => FieldKind::Composite,
            Self::Relation => FieldKind::Relation,
            _ => FieldKind::Scalar,
        }
    }

    /// Key under which the type-specific configuration lives in `schema`.
    #[must_use]
    pub const fn config_key(self) -> Option<&'static str> {
        match self {
            Self::Text | Self::Textarea => Some("textConfig"),
            Self::Number => Some("numberConfig"),
            Self::Currency => Some("currencyConfig"),
            Self::Rating => Some("ratingConfig"),
            Self::Select => Some("selectConfig"),
            Self::Socid => Some("socidConfig"),
            Self::Tags => Some("tagsConfig"),
            Self::Skills => Some("skillsConfig"),
            Self::OtherVerification => Some("otherVerificationConfig"),
            Self::Relation => Some("relationConfig"),
            Self::Email | Self::Boolean | Self::Date => None,
        }
    }

    /// Types whose option set or structure only exists in their config.
    /// A missing config on these is worth reporting.
    #[must_use]
    pub const fn expects_config(self) -> bool {
        matches!(
            self,
            Self::Select | Self::Skills | Self::OtherVerification | Self::Relation
        )
    }

    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Number | Self::Currency | Self::Rating)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| SchemaError::InvalidField(format!("Unknown field type '{s}'")))
    }
}
