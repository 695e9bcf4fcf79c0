use serde::{Deserialize, Serialize};

/// Generic validation rules stored in the `validators` JSON column.
///
/// `min`/`max` bound numeric values; `minLength`/`maxLength` bound string
/// length in characters and array length in items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidatorRules {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(alias = "min_length", skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(alias = "max_length", skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Message shown instead of the generic one when `pattern` fails
    #[serde(alias = "pattern_message", skip_serializing_if = "Option::is_none")]
    pub pattern_message: Option<String>,
}

impl ValidatorRules {
    /// Checks the rules are internally consistent.
    pub fn check(&self) -> Result<(), String> {
        if let (Some(min), Some(max)) = (self.min, self.max) {
            if min > max {
                return Err(format!("min {min} is greater than max {max}"));
            }
        }
        if let (Some(min), Some(max)) = (self.min_length, self.max_length) {
            if min > max {
                return Err(format!("minLength {min} is greater than maxLength {max}"));
            }
        }
        Ok(())
    }
}
