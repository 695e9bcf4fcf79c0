use serde::{Deserialize, Serialize};

use super::TypeConfig;

/// Configuration for `relation` fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RelationConfig {
    /// Slug of the target directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
    pub multiple: bool,
    /// Field of the target record shown in pickers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_field: Option<String>,
}

impl TypeConfig for RelationConfig {
    const FIELDS: &'static [&'static str] = &["directory", "multiple", "displayField"];

    fn check(&self) -> Result<(), String> {
        match &self.directory {
            Some(slug) if slug.trim().is_empty() => {
                Err("directory must not be empty".to_string())
            }
            _ => Ok(()),
        }
    }
}
