use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::TypeConfig;

/// One input of an `other_verification` field: a bare key or
/// `{key, label, required}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VerificationField {
    Key(String),
    Detailed {
        key: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        #[serde(default)]
        required: bool,
    },
}

impl VerificationField {
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Key(key) | Self::Detailed { key, .. } => key.trim(),
        }
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Detailed {
                label: Some(label), ..
            } => Some(label),
            _ => None,
        }
    }

    #[must_use]
    pub const fn required(&self) -> bool {
        matches!(self, Self::Detailed { required: true, .. })
    }
}

/// Whether a verification input takes text or an uploaded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationSlot {
    Text,
    Image,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OtherVerificationConfig {
    #[serde(alias = "text_fields")]
    pub text_fields: Vec<VerificationField>,
    #[serde(alias = "image_fields")]
    pub image_fields: Vec<VerificationField>,
}

impl OtherVerificationConfig {
    /// Text inputs first, then image inputs.
    pub fn inputs(&self) -> impl Iterator<Item = (VerificationSlot, &VerificationField)> {
        self.text_fields
            .iter()
            .map(|f| (VerificationSlot::Text, f))
            .chain(self.image_fields.iter().map(|f| (VerificationSlot::Image, f)))
    }

    #[must_use]
    pub fn slot_of(&self, key: &str) -> Option<VerificationSlot> {
        self.inputs()
            .find(|(_, field)| field.key() == key)
            .map(|(slot, _)| slot)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text_fields.is_empty() && self.image_fields.is_empty()
    }
}

impl TypeConfig for OtherVerificationConfig {
    const FIELDS: &'static [&'static str] =
        &["textFields", "imageFields", "text_fields", "image_fields"];

    fn check(&self) -> Result<(), String> {
        let mut seen = HashSet::new();
        for (_, field) in self.inputs() {
            if field.key().is_empty() {
                return Err("verification inputs need a key".to_string());
            }
            if !seen.insert(field.key()) {
                return Err(format!("verification input '{}' is declared twice", field.key()));
            }
        }
        Ok(())
    }
}
