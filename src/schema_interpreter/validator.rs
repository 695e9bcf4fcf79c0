//! Value validation for a [`TypedField`].
//!
//! Checks run in a fixed order: presence (`required`), the generic
//! `validators` rules, then the rules of the field's type configuration.

use chrono::{DateTime, NaiveDate};
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::collections::HashSet;

use super::error::ValidationError;
use super::types::TypedField;
use crate::config::InterpreterConfig;
use crate::error_handling::RegexUtils;
use crate::schema::patch::json_type_name;
use crate::schema::types::config::{
    CurrencyConfig, FieldConfig, NumberConfig, OtherVerificationConfig, RatingConfig,
    RelationConfig, SelectConfig, SkillsConfig, SocidConfig, TagsConfig, TextConfig,
    VerificationSlot,
};

type Result<T> = std::result::Result<T, ValidationError>;

pub(crate) struct ValueValidator<'a> {
    field: &'a TypedField,
    settings: &'a InterpreterConfig,
}

impl<'a> ValueValidator<'a> {
    pub(crate) const fn new(field: &'a TypedField, settings: &'a InterpreterConfig) -> Self {
        Self { field, settings }
    }

    pub(crate) fn validate(&self, value: &Value) -> Result<()> {
        if self.is_empty(value) {
            if self.field.required {
                crate::log_validation_debug!("Field '{}' is required but empty", self.field.key);
                return Err(ValidationError::missing_required(&self.field.key));
            }
            return Ok(());
        }

        self.check_rules(value)?;
        self.check_type(value).map_err(|err| {
            crate::log_validation_debug!("Rejected value for '{}': {}", self.field.key, err);
            err
        })
    }

    fn key(&self) -> &str {
        &self.field.key
    }

    fn is_empty(&self, value: &Value) -> bool {
        match value {
            Value::Null => true,
            Value::String(s) => self.clean(s).is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::Object(map) => map.is_empty(),
            Value::Bool(_) | Value::Number(_) => false,
        }
    }

    fn clean<'v>(&self, s: &'v str) -> &'v str {
        if self.settings.trim_strings {
            s.trim()
        } else {
            s
        }
    }

    /// Strings as-is, numbers in their JSON form.
    fn scalar_text<'v>(&self, value: &'v Value) -> Option<Cow<'v, str>> {
        match value {
            Value::String(s) => Some(Cow::Borrowed(self.clean(s))),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            _ => None,
        }
    }

    // ---- generic validators -------------------------------------------

    fn check_rules(&self, value: &Value) -> Result<()> {
        let rules = &self.field.rules;

        if self.field.field_type.is_numeric() && (rules.min.is_some() || rules.max.is_some()) {
            let number = self.expect_number(value)?;
            self.check_range(number, rules.min, rules.max)?;
        }

        let length = match value {
            Value::String(s) => Some(self.clean(s).chars().count()),
            Value::Array(items) => Some(items.len()),
            _ => None,
        };
        if let Some(length) = length {
            if let Some(min) = rules.min_length.filter(|min| length < *min) {
                return Err(ValidationError::out_of_range(
                    self.key(),
                    format!("length {length} is shorter than {min}"),
                ));
            }
            if let Some(max) = rules.max_length.filter(|max| length > *max) {
                return Err(ValidationError::out_of_range(
                    self.key(),
                    format!("length {length} is longer than {max}"),
                ));
            }
        }

        if let Some(pattern) = &rules.pattern {
            if let Some(text) = self.scalar_text(value) {
                if !pattern.is_match(&text) {
                    let message = rules.pattern_message.clone().unwrap_or_else(|| {
                        format!("'{text}' does not match {}", pattern.as_str())
                    });
                    return Err(ValidationError::pattern_mismatch(self.key(), message));
                }
            }
        }
        Ok(())
    }

    fn check_range(&self, number: f64, min: Option<f64>, max: Option<f64>) -> Result<()> {
        if let Some(min) = min.filter(|min| number < *min) {
            return Err(ValidationError::out_of_range(
                self.key(),
                format!("{number} is less than the minimum {min}"),
            ));
        }
        if let Some(max) = max.filter(|max| number > *max) {
            return Err(ValidationError::out_of_range(
                self.key(),
                format!("{number} is greater than the maximum {max}"),
            ));
        }
        Ok(())
    }

    // ---- shape helpers ------------------------------------------------

    fn mismatch(&self, expected: &str, value: &Value) -> ValidationError {
        ValidationError::type_mismatch(
            self.key(),
            format!("expected {expected}, got {}", json_type_name(value)),
        )
    }

    fn expect_str<'v>(&self, value: &'v Value) -> Result<&'v str> {
        value
            .as_str()
            .map(|s| self.clean(s))
            .ok_or_else(|| self.mismatch("a string", value))
    }

    fn expect_number(&self, value: &Value) -> Result<f64> {
        let number = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => self.clean(s).parse::<f64>().ok(),
            _ => None,
        };
        number
            .filter(|n| n.is_finite())
            .ok_or_else(|| self.mismatch("a number", value))
    }

    fn expect_array<'v>(&self, value: &'v Value) -> Result<&'v [Value]> {
        value
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| self.mismatch("an array", value))
    }

    fn expect_object<'v>(&self, value: &'v Value) -> Result<&'v Map<String, Value>> {
        value
            .as_object()
            .ok_or_else(|| self.mismatch("an object", value))
    }

    // ---- type-specific rules ------------------------------------------

    fn check_type(&self, value: &Value) -> Result<()> {
        match &self.field.config {
            FieldConfig::Text(config) => self.check_text(config, value),
            FieldConfig::Email => self.check_email(value),
            FieldConfig::Number(config) => self.check_number(config, value),
            FieldConfig::Currency(config) => self.check_currency(config, value),
            FieldConfig::Rating(config) => self.check_rating(config, value),
            FieldConfig::Boolean => self.check_boolean(value),
            FieldConfig::Date => self.check_date(value),
            FieldConfig::Select(config) => self.check_select(config, value),
            FieldConfig::Socid(config) => self.check_socid(config, value),
            FieldConfig::Tags(config) => self.check_tags(config, value),
            FieldConfig::Skills(config) => self.check_skills(config, value),
            FieldConfig::OtherVerification(config) => self.check_verification(config, value),
            FieldConfig::Relation(config) => self.check_relation(config, value),
        }
    }

    fn check_text(&self, config: &TextConfig, value: &Value) -> Result<()> {
        let text = self.expect_str(value)?;
        if let Some(max) = config.max_length {
            let length = text.chars().count();
            if length > max {
                return Err(ValidationError::out_of_range(
                    self.key(),
                    format!("length {length} is longer than {max}"),
                ));
            }
        }
        Ok(())
    }

    fn check_email(&self, value: &Value) -> Result<()> {
        let text = self.expect_str(value)?;
        let email = RegexUtils::email()
            .map_err(|e| ValidationError::invalid_config(self.key(), e.to_string()))?;
        if email.is_match(text) {
            Ok(())
        } else {
            Err(ValidationError::pattern_mismatch(
                self.key(),
                format!("'{text}' is not a valid email address"),
            ))
        }
    }

    fn check_number(&self, config: &NumberConfig, value: &Value) -> Result<()> {
        let number = self.expect_number(value)?;
        if config.integer && number.fract() != 0.0 {
            return Err(ValidationError::type_mismatch(
                self.key(),
                format!("{number} is not a whole number"),
            ));
        }
        self.check_range(number, config.min, config.max)
    }

    fn check_currency(&self, config: &CurrencyConfig, value: &Value) -> Result<()> {
        let amount = self.expect_number(value)?;
        if !config.allow_negative && amount < 0.0 {
            return Err(ValidationError::out_of_range(
                self.key(),
                format!("{amount} is negative"),
            ));
        }
        self.check_range(amount, config.min, config.max)?;

        let precision = config
            .precision
            .unwrap_or(self.settings.default_currency_precision);
        if !fits_precision(amount, precision) {
            return Err(ValidationError::pattern_mismatch(
                self.key(),
                format!("{amount} has more than {precision} decimal places"),
            ));
        }
        Ok(())
    }

    fn check_rating(&self, config: &RatingConfig, value: &Value) -> Result<()> {
        let rating = self.expect_number(value)?;
        let max = config.max.unwrap_or(self.settings.default_rating_max);
        self.check_range(rating, Some(0.0), Some(f64::from(max)))?;

        let step = if config.allow_half { 0.5 } else { 1.0 };
        if !is_multiple_of(rating, step) {
            return Err(ValidationError::pattern_mismatch(
                self.key(),
                format!("{rating} is not a multiple of {step}"),
            ));
        }
        Ok(())
    }

    fn check_boolean(&self, value: &Value) -> Result<()> {
        match value {
            Value::Bool(_) => Ok(()),
            Value::String(s) if matches!(self.clean(s), "true" | "false") => Ok(()),
            _ => Err(self.mismatch("a boolean", value)),
        }
    }

    fn check_date(&self, value: &Value) -> Result<()> {
        let text = self.expect_str(value)?;
        let parses = NaiveDate::parse_from_str(text, "%Y-%m-%d").is_ok()
            || DateTime::parse_from_rfc3339(text).is_ok();
        if parses {
            Ok(())
        } else {
            Err(ValidationError::pattern_mismatch(
                self.key(),
                format!("'{text}' is not a YYYY-MM-DD or RFC 3339 date"),
            ))
        }
    }

    fn check_select(&self, config: &SelectConfig, value: &Value) -> Result<()> {
        let values = if config.multiple {
            self.expect_array(value)?.iter().collect::<Vec<_>>()
        } else {
            vec![value]
        };

        for item in values {
            let choice = self
                .scalar_text(item)
                .ok_or_else(|| self.mismatch("an option value", item))?;
            if !config.permits(&choice) {
                return Err(ValidationError::option_not_allowed(
                    self.key(),
                    format!("'{choice}' is not one of the configured options"),
                ));
            }
        }
        Ok(())
    }

    fn check_socid(&self, config: &SocidConfig, value: &Value) -> Result<()> {
        let raw = self
            .scalar_text(value)
            .ok_or_else(|| self.mismatch("an identification number", value))?;
        let id = SocidConfig::normalize(&raw);

        if let Some(prefix) = config.prefix.as_deref() {
            if !id.starts_with(prefix) {
                return Err(ValidationError::pattern_mismatch(
                    self.key(),
                    format!("'{raw}' must start with '{prefix}'"),
                ));
            }
        }
        let body = config
            .prefix
            .as_deref()
            .and_then(|prefix| id.strip_prefix(prefix))
            .unwrap_or(id.as_str());
        if config.digits_only && !body.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::pattern_mismatch(
                self.key(),
                format!("'{raw}' must contain only digits"),
            ));
        }
        if let Some(length) = config.length {
            let actual = id.chars().count();
            if actual != length {
                return Err(ValidationError::out_of_range(
                    self.key(),
                    format!("'{raw}' has {actual} characters, expected {length}"),
                ));
            }
        }
        Ok(())
    }

    fn check_tags(&self, config: &TagsConfig, value: &Value) -> Result<()> {
        let tags = self.expect_array(value)?;
        if let Some(max) = config.max_tags.filter(|max| tags.len() > *max) {
            return Err(ValidationError::out_of_range(
                self.key(),
                format!("{} tags given, at most {max} allowed", tags.len()),
            ));
        }

        let mut seen = HashSet::new();
        for item in tags {
            let tag = item
                .as_str()
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .ok_or_else(|| self.mismatch("a non-empty tag", item))?;
            if let Some(max) = config.max_tag_length {
                if tag.chars().count() > max {
                    return Err(ValidationError::out_of_range(
                        self.key(),
                        format!("tag '{tag}' is longer than {max} characters"),
                    ));
                }
            }
            if !seen.insert(tag.to_lowercase()) {
                return Err(ValidationError::pattern_mismatch(
                    self.key(),
                    format!("tag '{tag}' appears more than once"),
                ));
            }
            if !config.permits(tag) {
                return Err(ValidationError::option_not_allowed(
                    self.key(),
                    format!("tag '{tag}' is not one of the suggestions"),
                ));
            }
        }
        Ok(())
    }

    fn check_skills(&self, config: &SkillsConfig, value: &Value) -> Result<()> {
        let entries = match value {
            Value::Array(items) => items.iter().collect::<Vec<_>>(),
            single => vec![single],
        };
        if let Some(max) = config.max_selections.filter(|max| entries.len() > *max) {
            return Err(ValidationError::out_of_range(
                self.key(),
                format!("{} skills selected, at most {max} allowed", entries.len()),
            ));
        }
        entries
            .into_iter()
            .try_for_each(|entry| self.check_skill_entry(config, entry))
    }

    fn check_skill_entry(&self, config: &SkillsConfig, entry: &Value) -> Result<()> {
        // Nothing to check entries against.
        if !config.restricts_categories() {
            return Ok(());
        }
        match entry {
            Value::String(name) => {
                let name = name.trim();
                if name.is_empty() {
                    return Err(self.mismatch("a non-empty skill", entry));
                }
                if config.permits_entry(name) {
                    Ok(())
                } else {
                    Err(ValidationError::option_not_allowed(
                        self.key(),
                        format!("'{name}' is not an allowed category or skill"),
                    ))
                }
            }
            Value::Object(map) => {
                let text = |key: &str| {
                    map.get(key)
                        .and_then(Value::as_str)
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                };
                let category = text("category");
                let skill = text("skill").or_else(|| text("name"));

                match (category, skill) {
                    (Some(category), _) if !config.permits_category(category) => {
                        Err(ValidationError::option_not_allowed(
                            self.key(),
                            format!("category '{category}' is not allowed"),
                        ))
                    }
                    (None, Some(skill)) if !config.permits_entry(skill) => {
                        Err(ValidationError::option_not_allowed(
                            self.key(),
                            format!("'{skill}' is not an allowed skill"),
                        ))
                    }
                    (None, None) => Err(ValidationError::type_mismatch(
                        self.key(),
                        "skill entries need a category or a skill",
                    )),
                    _ => Ok(()),
                }
            }
            other => Err(self.mismatch("a skill name or {category, skill} object", other)),
        }
    }

    fn check_verification(&self, config: &OtherVerificationConfig, value: &Value) -> Result<()> {
        let submitted = self.expect_object(value)?;
        if config.is_empty() {
            return Ok(());
        }

        for (key, item) in submitted {
            let slot = config.slot_of(key).ok_or_else(|| {
                ValidationError::option_not_allowed(
                    self.key(),
                    format!("'{key}' is not a configured verification input"),
                )
            })?;
            let valid_shape = match (slot, item) {
                (_, Value::Null) | (_, Value::String(_)) => true,
                (VerificationSlot::Image, Value::Array(uploads)) => {
                    uploads.iter().all(Value::is_string)
                }
                _ => false,
            };
            if !valid_shape {
                let expected = match slot {
                    VerificationSlot::Text => "text",
                    VerificationSlot::Image => "an upload reference or a list of them",
                };
                return Err(ValidationError::type_mismatch(
                    self.key(),
                    format!("'{key}' must be {expected}, got {}", json_type_name(item)),
                ));
            }
        }

        for (_, input) in config.inputs().filter(|(_, input)| input.required()) {
            let present = submitted
                .get(input.key())
                .is_some_and(|item| !self.is_empty(item));
            if !present {
                return Err(ValidationError::new(
                    self.key(),
                    super::error::ValidationErrorKind::MissingRequiredValue,
                    format!("verification input '{}' is required", input.key()),
                ));
            }
        }
        Ok(())
    }

    fn check_relation(&self, config: &RelationConfig, value: &Value) -> Result<()> {
        let ids = match value {
            Value::Array(items) if config.multiple => items.iter().collect::<Vec<_>>(),
            Value::Array(_) => return Err(self.mismatch("a single record id", value)),
            single => vec![single],
        };
        for id in ids {
            let valid = match id {
                Value::String(s) => !s.trim().is_empty(),
                Value::Number(n) => n.is_u64() || n.is_i64(),
                _ => false,
            };
            if !valid {
                return Err(self.mismatch("a record id", id));
            }
        }
        Ok(())
    }
}

fn fits_precision(amount: f64, precision: u32) -> bool {
    let scaled = amount * 10f64.powi(i32::try_from(precision).unwrap_or(i32::MAX));
    (scaled - scaled.round()).abs() <= 1e-9 * scaled.abs().max(1.0)
}

fn is_multiple_of(value: f64, step: f64) -> bool {
    let ratio = value / step;
    (ratio - ratio.round()).abs() <= 1e-9
}
