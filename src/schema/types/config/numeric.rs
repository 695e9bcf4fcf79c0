use serde::{Deserialize, Serialize};

use super::TypeConfig;

fn check_bounds(min: Option<f64>, max: Option<f64>) -> Result<(), String> {
    match (min, max) {
        (Some(min), Some(max)) if min > max => {
            Err(format!("min {min} is greater than max {max}"))
        }
        _ => Ok(()),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NumberConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    /// Reject fractional values
    pub integer: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl TypeConfig for NumberConfig {
    const FIELDS: &'static [&'static str] = &["min", "max", "step", "integer", "unit"];

    fn check(&self) -> Result<(), String> {
        check_bounds(self.min, self.max)?;
        match self.step {
            Some(step) if step <= 0.0 => Err("step must be positive".to_string()),
            _ => Ok(()),
        }
    }
}

/// Configuration for `currency` fields.
///
/// `currency` and `precision` fall back to the interpreter defaults when
/// absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrencyConfig {
    /// ISO 4217 code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Allowed decimal places
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    pub allow_negative: bool,
}

/// Upper bound on `precision`; beyond this `f64` stops being exact enough.
pub const MAX_CURRENCY_PRECISION: u32 = 8;

impl TypeConfig for CurrencyConfig {
    const FIELDS: &'static [&'static str] =
        &["currency", "precision", "min", "max", "allowNegative"];

    fn check(&self) -> Result<(), String> {
        if let Some(code) = &self.currency {
            if code.len() != 3 || !code.chars().all(|c| c.is_ascii_uppercase()) {
                return Err(format!("currency '{code}' is not an ISO 4217 code"));
            }
        }
        if let Some(precision) = self.precision {
            if precision > MAX_CURRENCY_PRECISION {
                return Err(format!(
                    "precision {precision} exceeds {MAX_CURRENCY_PRECISION}"
                ));
            }
        }
        check_bounds(self.min, self.max)
    }
}

/// Configuration for `rating` fields. `max` falls back to the interpreter
/// default when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RatingConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    pub allow_half: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl TypeConfig for RatingConfig {
    const FIELDS: &'static [&'static str] = &["max", "allowHalf", "icon"];

    fn check(&self) -> Result<(), String> {
        if self.max == Some(0) {
            return Err("max must be at least 1".to_string());
        }
        Ok(())
    }
}
