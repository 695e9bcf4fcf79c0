use serde::{Deserialize, Serialize};

use super::{dedup_preserving_order, TypeConfig};

/// One selectable option: either a bare value or `{value, label}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChoiceOption {
    Value(String),
    Labeled {
        value: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
}

impl ChoiceOption {
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Value(value) | Self::Labeled { value, .. } => value,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Labeled {
                label: Some(label), ..
            } => label,
            _ => self.value(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectConfig {
    pub options: Vec<ChoiceOption>,
    /// Value is an array of option values
    pub multiple: bool,
}

impl SelectConfig {
    /// Option values in declaration order, duplicates removed.
    #[must_use]
    pub fn values(&self) -> Vec<String> {
        dedup_preserving_order(self.options.iter().map(ChoiceOption::value))
    }

    /// An empty option list means "no restriction".
    #[must_use]
    pub fn permits(&self, value: &str) -> bool {
        self.options.is_empty() || self.options.iter().any(|o| o.value() == value)
    }
}

impl TypeConfig for SelectConfig {
    const FIELDS: &'static [&'static str] = &["options", "multiple"];

    fn check(&self) -> Result<(), String> {
        if self.options.iter().any(|o| o.value().trim().is_empty()) {
            return Err("options must have non-empty values".to_string());
        }
        Ok(())
    }
}

/// Configuration for the tag input widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TagsConfig {
    pub suggestions: Vec<String>,
    /// Accept tags that are not in `suggestions`
    pub allow_custom: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tags: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tag_length: Option<usize>,
}

impl Default for TagsConfig {
    fn default() -> Self {
        Self {
            suggestions: Vec::new(),
            allow_custom: true,
            max_tags: None,
            max_tag_length: None,
        }
    }
}

impl TagsConfig {
    #[must_use]
    pub fn permits(&self, tag: &str) -> bool {
        self.allow_custom
            || self.suggestions.is_empty()
            || self.suggestions.iter().any(|s| s.trim() == tag)
    }
}

impl TypeConfig for TagsConfig {
    const FIELDS: &'static [&'static str] =
        &["suggestions", "allowCustom", "maxTags", "maxTagLength"];
}
