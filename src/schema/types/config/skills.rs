use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{dedup_preserving_order, TypeConfig};

/// A skill added by the directory owner: a bare name or `{name, category}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CustomSkill {
    Name(String),
    Detailed {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        category: Option<String>,
    },
}

impl CustomSkill {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) | Self::Detailed { name, .. } => name.trim(),
        }
    }

    #[must_use]
    pub fn category(&self) -> Option<&str> {
        match self {
            Self::Detailed {
                category: Some(category),
                ..
            } => Some(category.trim()),
            _ => None,
        }
    }
}

/// Configuration for `skills` fields.
///
/// When `allowed_categories` is empty the field is unrestricted and
/// `custom_categories` / `custom_skills` only seed the picker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillsConfig {
    #[serde(alias = "allowed_categories")]
    pub allowed_categories: Vec<String>,
    #[serde(alias = "custom_categories")]
    pub custom_categories: Vec<String>,
    #[serde(alias = "custom_skills")]
    pub custom_skills: Vec<CustomSkill>,
    #[serde(alias = "max_selections", skip_serializing_if = "Option::is_none")]
    pub max_selections: Option<usize>,
}

impl SkillsConfig {
    #[must_use]
    pub fn restricts_categories(&self) -> bool {
        self.allowed_categories.iter().any(|c| !c.trim().is_empty())
    }

    /// Allowed categories followed by custom ones, duplicates removed.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        dedup_preserving_order(
            self.allowed_categories
                .iter()
                .chain(self.custom_categories.iter()),
        )
    }

    #[must_use]
    pub fn is_custom_category(&self, category: &str) -> bool {
        !self.allowed_categories.iter().any(|c| c.trim() == category)
            && self.custom_categories.iter().any(|c| c.trim() == category)
    }

    #[must_use]
    pub fn permits_category(&self, category: &str) -> bool {
        !self.restricts_categories() || self.categories().iter().any(|c| c == category)
    }

    /// Custom skills with blank names and repeated names removed.
    #[must_use]
    pub fn skills(&self) -> Vec<&CustomSkill> {
        let mut seen = HashSet::new();
        self.custom_skills
            .iter()
            .filter(|skill| !skill.name().is_empty() && seen.insert(skill.name()))
            .collect()
    }

    #[must_use]
    pub fn find_skill(&self, name: &str) -> Option<&CustomSkill> {
        self.custom_skills.iter().find(|skill| skill.name() == name)
    }

    /// Whether a bare string entry names a permitted category or a known
    /// custom skill whose category is permitted.
    #[must_use]
    pub fn permits_entry(&self, entry: &str) -> bool {
        if !self.restricts_categories() || self.permits_category(entry) {
            return true;
        }
        self.find_skill(entry)
            .is_some_and(|skill| skill.category().map_or(true, |c| self.permits_category(c)))
    }
}

impl TypeConfig for SkillsConfig {
    const FIELDS: &'static [&'static str] = &[
        "allowedCategories",
        "customCategories",
        "customSkills",
        "maxSelections",
        "allowed_categories",
        "custom_categories",
        "custom_skills",
        "max_selections",
    ];

    fn check(&self) -> Result<(), String> {
        if self.max_selections == Some(0) {
            return Err("maxSelections must be positive".to_string());
        }
        Ok(())
    }
}
