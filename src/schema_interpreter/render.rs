//! UI descriptors for fields.

use serde::Serialize;
use serde_json::{json, Value};
use std::collections::{BTreeMap, HashSet};

use super::types::TypedField;
use crate::config::InterpreterConfig;
use crate::schema::types::config::{
    dedup_preserving_order, ConfigSource, CurrencyConfig, FieldConfig, NumberConfig,
    OtherVerificationConfig, RatingConfig, SelectConfig, SkillsConfig, TagsConfig, TextConfig,
    VerificationField,
};
use crate::schema::types::field::humanize_key;
use crate::schema::types::{FieldKind, FieldType};

/// Input control a front end should use for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Widget {
    TextInput,
    TextArea,
    EmailInput,
    NumberInput,
    CurrencyInput,
    RatingInput,
    Checkbox,
    DatePicker,
    Select,
    MultiSelect,
    SocidInput,
    TagInput,
    SkillsPicker,
    VerificationForm,
    RelationPicker,
}

/// Effective bounds after merging `validators` with the type configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderConstraints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderOption {
    pub value: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Added through an override list rather than the base set
    pub custom: bool,
}

impl RenderOption {
    fn plain(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
            group: None,
            custom: false,
        }
    }
}

/// Everything a front end needs to draw one field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderSpec {
    pub key: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub kind: FieldKind,
    pub widget: Widget,
    pub required: bool,
    pub constraints: RenderConstraints,
    pub options: Vec<RenderOption>,
    /// Widget settings, defaults already applied
    pub props: BTreeMap<String, Value>,
    pub config_source: ConfigSource,
}

pub(crate) fn describe(field: &TypedField, settings: &InterpreterConfig) -> RenderSpec {
    let mut spec = RenderSpec {
        key: field.key.clone(),
        label: field.label.clone(),
        field_type: field.field_type,
        kind: field.kind,
        widget: default_widget(field.field_type),
        required: field.required,
        constraints: RenderConstraints {
            min: field.rules.min,
            max: field.rules.max,
            min_length: field.rules.min_length,
            max_length: field.rules.max_length,
            pattern: field.rules.pattern_source().map(str::to_string),
            step: None,
        },
        options: Vec::new(),
        props: BTreeMap::new(),
        config_source: field.config_source,
    };

    match &field.config {
        FieldConfig::Text(config) => describe_text(&mut spec, config),
        FieldConfig::Number(config) => describe_number(&mut spec, config),
        FieldConfig::Currency(config) => describe_currency(&mut spec, config, settings),
        FieldConfig::Rating(config) => describe_rating(&mut spec, config, settings),
        FieldConfig::Select(config) => describe_select(&mut spec, config),
        FieldConfig::Socid(config) => {
            spec.props.insert("digitsOnly".into(), json!(config.digits_only));
            insert_opt(&mut spec.props, "prefix", config.prefix.as_ref());
            insert_opt(&mut spec.props, "mask", config.mask.as_ref());
            if let Some(length) = config.length {
                spec.constraints.min_length = Some(length);
                spec.constraints.max_length = Some(length);
            }
        }
        FieldConfig::Tags(config) => describe_tags(&mut spec, config),
        FieldConfig::Skills(config) => describe_skills(&mut spec, config),
        FieldConfig::OtherVerification(config) => describe_verification(&mut spec, config),
        FieldConfig::Relation(config) => {
            if config.multiple {
                spec.props.insert("multiple".into(), json!(true));
            }
            insert_opt(&mut spec.props, "directory", config.directory.as_ref());
            insert_opt(&mut spec.props, "displayField", config.display_field.as_ref());
        }
        FieldConfig::Email | FieldConfig::Boolean | FieldConfig::Date => {}
    }

    crate::log_render_debug!(
        "Described field '{}' as {:?} with {} options",
        spec.key,
        spec.widget,
        spec.options.len()
    );
    spec
}

const fn default_widget(field_type: FieldType) -> Widget {
    match field_type {
        FieldType::Text => Widget::TextInput,
        FieldType::Textarea => Widget::TextArea,
        FieldType::Email => Widget::EmailInput,
        FieldType::Number => Widget::NumberInput,
        FieldType::Currency => Widget::CurrencyInput,
        FieldType::Rating => Widget::RatingInput,
        FieldType::Boolean => Widget::Checkbox,
        FieldType::Date => Widget::DatePicker,
        FieldType::Select => Widget::Select,
        FieldType::Socid => Widget::SocidInput,
        FieldType::Tags => Widget::TagInput,
        FieldType::Skills => Widget::SkillsPicker,
        FieldType::OtherVerification => Widget::VerificationForm,
        FieldType::Relation => Widget::RelationPicker,
    }
}

fn insert_opt<T: Serialize>(props: &mut BTreeMap<String, Value>, key: &str, value: Option<T>) {
    if let Some(value) = value {
        props.insert(key.to_string(), json!(value));
    }
}

fn tighter_min(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.max(b)),
        (a, b) => a.or(b),
    }
}

fn tighter_max(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

fn tighter_len(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

fn describe_text(spec: &mut RenderSpec, config: &TextConfig) {
    spec.constraints.max_length = tighter_len(spec.constraints.max_length, config.max_length);
    insert_opt(&mut spec.props, "placeholder", config.placeholder.as_ref());
    if spec.field_type == FieldType::Textarea {
        spec.props.insert("rows".into(), json!(config.rows.unwrap_or(4)));
    }
}

fn describe_number(spec: &mut RenderSpec, config: &NumberConfig) {
    let c = &mut spec.constraints;
    c.min = tighter_min(c.min, config.min);
    c.max = tighter_max(c.max, config.max);
    c.step = config.step.or(config.integer.then_some(1.0));
    spec.props.insert("integer".into(), json!(config.integer));
    insert_opt(&mut spec.props, "unit", config.unit.as_ref());
}

fn describe_currency(spec: &mut RenderSpec, config: &CurrencyConfig, settings: &InterpreterConfig) {
    let precision = config
        .precision
        .unwrap_or(settings.default_currency_precision);
    let floor = (!config.allow_negative).then_some(0.0);

    let c = &mut spec.constraints;
    c.min = tighter_min(tighter_min(c.min, config.min), floor);
    c.max = tighter_max(c.max, config.max);
    c.step = Some(1.0 / 10f64.powi(i32::try_from(precision).unwrap_or(0)));

    let currency = config
        .currency
        .clone()
        .unwrap_or_else(|| settings.default_currency.clone());
    spec.props.insert("currency".into(), json!(currency));
    spec.props.insert("precision".into(), json!(precision));
    spec.props.insert("allowNegative".into(), json!(config.allow_negative));
}

fn describe_rating(spec: &mut RenderSpec, config: &RatingConfig, settings: &InterpreterConfig) {
    let max = config.max.unwrap_or(settings.default_rating_max);
    let c = &mut spec.constraints;
    c.min = tighter_min(c.min, Some(0.0));
    c.max = tighter_max(c.max, Some(f64::from(max)));
    c.step = Some(if config.allow_half { 0.5 } else { 1.0 });
    spec.props.insert("allowHalf".into(), json!(config.allow_half));
    spec.props.insert("icon".into(), json!(config.icon.as_deref().unwrap_or("star")));
}

fn describe_select(spec: &mut RenderSpec, config: &SelectConfig) {
    if config.multiple {
        spec.widget = Widget::MultiSelect;
    }
    let mut seen = HashSet::new();
    spec.options = config
        .options
        .iter()
        .filter(|option| seen.insert(option.value().to_string()))
        .map(|option| RenderOption {
            value: option.value().to_string(),
            label: option.label().to_string(),
            group: None,
            custom: false,
        })
        .collect();
    spec.props.insert("multiple".into(), json!(config.multiple));
}

fn describe_tags(spec: &mut RenderSpec, config: &TagsConfig) {
    spec.options = dedup_preserving_order(config.suggestions.iter())
        .into_iter()
        .map(RenderOption::plain)
        .collect();
    spec.props.insert("allowCustom".into(), json!(config.allow_custom));
    insert_opt(&mut spec.props, "maxTags", config.max_tags);
    insert_opt(&mut spec.props, "maxTagLength", config.max_tag_length);
}

fn describe_skills(spec: &mut RenderSpec, config: &SkillsConfig) {
    spec.options = config
        .categories()
        .into_iter()
        .map(|category| RenderOption {
            custom: config.is_custom_category(&category),
            ..RenderOption::plain(category)
        })
        .collect();

    let skills: Vec<Value> = config
        .skills()
        .into_iter()
        .map(|skill| {
            json!({
                "name": skill.name(),
                "category": skill.category(),
                "custom": true,
            })
        })
        .collect();
    spec.props.insert("skills".into(), Value::Array(skills));
    spec.props.insert(
        "restrictCategories".into(),
        json!(config.restricts_categories()),
    );
    insert_opt(&mut spec.props, "maxSelections", config.max_selections);
}

fn describe_verification(spec: &mut RenderSpec, config: &OtherVerificationConfig) {
    let entry = |input: &VerificationField| {
        json!({
            "key": input.key(),
            "label": input.label().map_or_else(|| humanize_key(input.key()), str::to_string),
            "required": input.required(),
        })
    };
    let text: Vec<Value> = config.text_fields.iter().map(entry).collect();
    let image: Vec<Value> = config.image_fields.iter().map(entry).collect();
    spec.props.insert("textFields".into(), Value::Array(text));
    spec.props.insert("imageFields".into(), Value::Array(image));
}
