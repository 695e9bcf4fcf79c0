use serde::{Deserialize, Serialize};

use super::TypeConfig;

/// Configuration for `text` and `textarea` fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    /// Visible rows for `textarea`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,
}

impl TypeConfig for TextConfig {
    const FIELDS: &'static [&'static str] = &["placeholder", "maxLength", "rows"];

    fn check(&self) -> Result<(), String> {
        if self.max_length == Some(0) {
            return Err("maxLength must be positive".to_string());
        }
        Ok(())
    }
}

/// Configuration for `socid` (social / national identification number)
/// fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocidConfig {
    /// Exact number of characters once separators are stripped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
    pub digits_only: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Input mask hint for the UI, e.g. `"###-##-####"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask: Option<String>,
}

impl Default for SocidConfig {
    fn default() -> Self {
        Self {
            length: None,
            digits_only: true,
            prefix: None,
            mask: None,
        }
    }
}

impl SocidConfig {
    /// Separators users commonly type that are ignored when checking.
    pub const SEPARATORS: [char; 3] = ['-', ' ', '.'];

    /// Strips separators from a raw identifier.
    #[must_use]
    pub fn normalize(raw: &str) -> String {
        raw.trim()
            .chars()
            .filter(|c| !Self::SEPARATORS.contains(c))
            .collect()
    }
}

impl TypeConfig for SocidConfig {
    const FIELDS: &'static [&'static str] = &["length", "digitsOnly", "prefix", "mask"];

    fn check(&self) -> Result<(), String> {
        if self.length == Some(0) {
            return Err("length must be positive".to_string());
        }
        Ok(())
    }
}
