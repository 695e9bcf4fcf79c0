use field_schema::testing::{
    create_skills_field, create_test_field, FieldDefinition, FieldInterpreter, FieldType,
    InterpreterConfig, ValidationErrorKind,
};
use serde_json::{json, Value};

fn kind_of(
    interpreter: &FieldInterpreter,
    field: &FieldDefinition,
    value: Value,
) -> Option<ValidationErrorKind> {
    interpreter.validate(field, &value).err().map(|e| e.kind)
}

#[test]
fn test_required_rejects_absent_and_empty_values() {
    let interpreter = FieldInterpreter::new();
    let field = create_test_field("name", FieldType::Text).with_required(true);

    for value in [json!(null), json!(""), json!("   "), json!([]), json!({})] {
        let err = interpreter.validate(&field, &value).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::MissingRequiredValue, "value {value}");
        assert_eq!(err.field, "name");
    }
    assert!(interpreter.validate(&field, &json!("Ada")).is_ok());
}

fn configured_schema(field_type: FieldType) -> Value {
    match field_type {
        FieldType::Select => json!({"selectConfig": {"options": ["a", "b"]}}),
        FieldType::Skills => json!({"skillsConfig": {"allowedCategories": ["A"]}}),
        FieldType::OtherVerification => {
            json!({"otherVerificationConfig": {"textFields": ["licence"]}})
        }
        FieldType::Relation => json!({"relationConfig": {"directory": "people"}}),
        FieldType::Tags => json!({"tagsConfig": {"suggestions": ["x"]}}),
        FieldType::Rating => json!({"ratingConfig": {"max": 10}}),
        _ => json!({}),
    }
}

#[test]
fn test_required_rejects_empty_values_for_every_type() {
    let interpreter = FieldInterpreter::new();
    let strict = FieldInterpreter::with_config(InterpreterConfig::strict());

    for field_type in FieldType::ALL {
        let field = create_test_field("value", field_type)
            .with_schema(configured_schema(field_type))
            .with_required(true);
        for value in [json!(null), json!(""), json!(" "), json!([]), json!({})] {
            for interpreter in [&interpreter, &strict] {
                assert_eq!(
                    kind_of(interpreter, &field, value.clone()),
                    Some(ValidationErrorKind::MissingRequiredValue),
                    "{field_type} with {value}"
                );
            }
        }
    }
}

#[test]
fn test_required_flag_from_validators() {
    let interpreter = FieldInterpreter::new();
    let field =
        create_test_field("name", FieldType::Text).with_validators(json!({"required": true}));
    assert_eq!(
        kind_of(&interpreter, &field, json!(null)),
        Some(ValidationErrorKind::MissingRequiredValue)
    );
}

#[test]
fn test_absent_optional_value_skips_other_checks() {
    let interpreter = FieldInterpreter::new();
    let field = create_test_field("email", FieldType::Email)
        .with_validators(json!({"minLength": 5, "pattern": "^x"}));
    assert!(interpreter.validate(&field, &json!(null)).is_ok());
    assert!(interpreter.validate(&field, &json!("")).is_ok());
}

#[test]
fn test_skills_rejects_unlisted_category() {
    let interpreter = FieldInterpreter::new();
    let field = create_skills_field("skills", &["A", "B"]);

    assert_eq!(
        kind_of(&interpreter, &field, json!([{"category": "C", "skill": "Welding"}])),
        Some(ValidationErrorKind::OptionNotAllowed)
    );
    assert_eq!(
        kind_of(&interpreter, &field, json!(["C"])),
        Some(ValidationErrorKind::OptionNotAllowed)
    );
    assert!(interpreter
        .validate(&field, &json!([{"category": "A", "skill": "Welding"}, "B"]))
        .is_ok());
}

#[test]
fn test_skills_custom_lists_extend_allowed_set() {
    let interpreter = FieldInterpreter::new();
    let field = create_test_field("skills", FieldType::Skills).with_schema(json!({
        "skillsConfig": {
            "allowedCategories": ["A"],
            "customCategories": ["C"],
            "customSkills": [{"name": "Rust", "category": "C"}, {"name": "Cobol", "category": "Z"}]
        }
    }));

    assert!(interpreter.validate(&field, &json!([{"category": "C"}])).is_ok());
    assert!(interpreter.validate(&field, &json!(["Rust"])).is_ok());
    assert_eq!(
        kind_of(&interpreter, &field, json!(["Cobol"])),
        Some(ValidationErrorKind::OptionNotAllowed)
    );
}

#[test]
fn test_skills_max_selections() {
    let interpreter = FieldInterpreter::new();
    let field = create_test_field("skills", FieldType::Skills)
        .with_schema(json!({"skillsConfig": {"allowedCategories": ["A"], "maxSelections": 1}}));
    assert_eq!(
        kind_of(&interpreter, &field, json!(["A", "A"])),
        Some(ValidationErrorKind::OutOfRange)
    );
}

#[test]
fn test_flat_snake_case_skills_config_is_enforced() {
    let interpreter = FieldInterpreter::new();
    let flat = create_test_field("skills", FieldType::Skills)
        .with_schema(json!({"allowed_categories": ["A", "B"]}));
    let nested = create_test_field("skills", FieldType::Skills)
        .with_schema(json!({"skillsConfig": {"allowed_categories": ["A", "B"]}}));

    for field in [&flat, &nested] {
        assert_eq!(
            kind_of(&interpreter, field, json!(["C"])),
            Some(ValidationErrorKind::OptionNotAllowed)
        );
        assert!(interpreter.validate(field, &json!(["A"])).is_ok());
    }
}

#[test]
fn test_skills_without_config_accepts_anything() {
    let interpreter = FieldInterpreter::new();
    let field = create_test_field("skills", FieldType::Skills);

    for value in [
        json!(["anything"]),
        json!([{"category": "X", "skill": "Y"}]),
        json!("single"),
        json!([1, true]),
    ] {
        assert!(interpreter.validate(&field, &value).is_ok(), "value {value}");
    }
}

#[test]
fn test_strict_mode_rejects_missing_skills_config() {
    let interpreter = FieldInterpreter::with_config(InterpreterConfig::strict());
    let field = create_test_field("skills", FieldType::Skills);
    let err = interpreter.validate(&field, &json!(["A"])).unwrap_err();
    assert_eq!(err.kind, ValidationErrorKind::InvalidSchemaConfig);
    assert!(err.message.contains("skillsConfig"));
}

#[test]
fn test_range_validators() {
    let interpreter = FieldInterpreter::new();
    let field = create_test_field("age", FieldType::Number)
        .with_validators(json!({"min": 18, "max": 65}));

    assert!(interpreter.validate(&field, &json!(30)).is_ok());
    assert!(interpreter.validate(&field, &json!("40")).is_ok());
    assert_eq!(kind_of(&interpreter, &field, json!(17)), Some(ValidationErrorKind::OutOfRange));
    assert_eq!(kind_of(&interpreter, &field, json!(66.5)), Some(ValidationErrorKind::OutOfRange));
    assert_eq!(
        kind_of(&interpreter, &field, json!("old")),
        Some(ValidationErrorKind::TypeMismatch)
    );
}

#[test]
fn test_length_validators() {
    let interpreter = FieldInterpreter::new();
    let field = create_test_field("code", FieldType::Text)
        .with_validators(json!({"minLength": 2, "maxLength": 4}));

    assert!(interpreter.validate(&field, &json!("abc")).is_ok());
    assert_eq!(kind_of(&interpreter, &field, json!("a")), Some(ValidationErrorKind::OutOfRange));
    assert_eq!(
        kind_of(&interpreter, &field, json!("abcde")),
        Some(ValidationErrorKind::OutOfRange)
    );
}

#[test]
fn test_pattern_validator_uses_message() {
    let interpreter = FieldInterpreter::new();
    let field = create_test_field("code", FieldType::Text).with_validators(json!({
        "pattern": "^[A-Z]{3}$",
        "patternMessage": "Use three capital letters"
    }));

    assert!(interpreter.validate(&field, &json!("ABC")).is_ok());
    let err = interpreter.validate(&field, &json!("abc")).unwrap_err();
    assert_eq!(err.kind, ValidationErrorKind::PatternMismatch);
    assert_eq!(err.message, "Use three capital letters");
}

#[test]
fn test_email() {
    let interpreter = FieldInterpreter::new();
    let field = create_test_field("email", FieldType::Email);
    assert!(interpreter.validate(&field, &json!("ada@example.com")).is_ok());
    assert_eq!(
        kind_of(&interpreter, &field, json!("ada@example")),
        Some(ValidationErrorKind::PatternMismatch)
    );
    assert_eq!(kind_of(&interpreter, &field, json!(3)), Some(ValidationErrorKind::TypeMismatch));
}

#[test]
fn test_select_options() {
    let interpreter = FieldInterpreter::new();
    let single = create_test_field("color", FieldType::Select)
        .with_schema(json!({
            "selectConfig": {"options": ["red", {"value": "blue", "label": "Blue"}]}
        }));
    assert!(interpreter.validate(&single, &json!("blue")).is_ok());
    assert_eq!(
        kind_of(&interpreter, &single, json!("green")),
        Some(ValidationErrorKind::OptionNotAllowed)
    );

    let multiple = create_test_field("colors", FieldType::Select)
        .with_schema(json!({"options": ["red", "blue"], "multiple": true}));
    assert!(interpreter.validate(&multiple, &json!(["red", "blue"])).is_ok());
    assert_eq!(
        kind_of(&interpreter, &multiple, json!("red")),
        Some(ValidationErrorKind::TypeMismatch)
    );
}

#[test]
fn test_select_without_options_is_unrestricted() {
    let interpreter = FieldInterpreter::new();
    let field = create_test_field("color", FieldType::Select);
    assert!(interpreter.validate(&field, &json!("anything")).is_ok());
}

#[test]
fn test_date() {
    let interpreter = FieldInterpreter::new();
    let field = create_test_field("born", FieldType::Date);
    assert!(interpreter.validate(&field, &json!("2024-02-29")).is_ok());
    assert!(interpreter.validate(&field, &json!("2024-02-29T10:00:00Z")).is_ok());
    assert_eq!(
        kind_of(&interpreter, &field, json!("2023-02-29")),
        Some(ValidationErrorKind::PatternMismatch)
    );
}

#[test]
fn test_currency() {
    let interpreter = FieldInterpreter::new();
    let field = create_test_field("price", FieldType::Currency);
    assert!(interpreter.validate(&field, &json!(12.5)).is_ok());
    assert_eq!(
        kind_of(&interpreter, &field, json!(12.345)),
        Some(ValidationErrorKind::PatternMismatch)
    );
    assert_eq!(kind_of(&interpreter, &field, json!(-1)), Some(ValidationErrorKind::OutOfRange));
}

#[test]
fn test_rating() {
    let interpreter = FieldInterpreter::new();
    let whole = create_test_field("score", FieldType::Rating);
    assert!(interpreter.validate(&whole, &json!(4)).is_ok());
    assert_eq!(kind_of(&interpreter, &whole, json!(6)), Some(ValidationErrorKind::OutOfRange));
    assert_eq!(
        kind_of(&interpreter, &whole, json!(3.5)),
        Some(ValidationErrorKind::PatternMismatch)
    );

    let half = create_test_field("score", FieldType::Rating)
        .with_schema(json!({"ratingConfig": {"max": 10, "allowHalf": true}}));
    assert!(interpreter.validate(&half, &json!(9.5)).is_ok());
}

#[test]
fn test_boolean() {
    let interpreter = FieldInterpreter::new();
    let field = create_test_field("active", FieldType::Boolean);
    assert!(interpreter.validate(&field, &json!(false)).is_ok());
    assert!(interpreter.validate(&field, &json!("true")).is_ok());
    assert_eq!(
        kind_of(&interpreter, &field, json!("yes")),
        Some(ValidationErrorKind::TypeMismatch)
    );
}

#[test]
fn test_socid() {
    let interpreter = FieldInterpreter::new();
    let field = create_test_field("national_id", FieldType::Socid)
        .with_schema(json!({"socidConfig": {"length": 11}}));
    assert!(interpreter.validate(&field, &json!("123-456-789 01")).is_ok());
    assert_eq!(kind_of(&interpreter, &field, json!("1234")), Some(ValidationErrorKind::OutOfRange));
    assert_eq!(
        kind_of(&interpreter, &field, json!("12a45678901")),
        Some(ValidationErrorKind::PatternMismatch)
    );
}

#[test]
fn test_tags() {
    let interpreter = FieldInterpreter::new();
    let field = create_test_field("tags", FieldType::Tags).with_schema(json!({
        "tagsConfig": {"suggestions": ["rust", "go"], "allowCustom": false, "maxTags": 2}
    }));
    assert!(interpreter.validate(&field, &json!(["rust", "go"])).is_ok());
    assert_eq!(
        kind_of(&interpreter, &field, json!(["rust", "Rust"])),
        Some(ValidationErrorKind::PatternMismatch)
    );
    assert_eq!(
        kind_of(&interpreter, &field, json!(["java"])),
        Some(ValidationErrorKind::OptionNotAllowed)
    );
    assert_eq!(
        kind_of(&interpreter, &field, json!(["rust", "go", "c"])),
        Some(ValidationErrorKind::OutOfRange)
    );
}

#[test]
fn test_other_verification() {
    let interpreter = FieldInterpreter::new();
    let field = create_test_field("verification", FieldType::OtherVerification).with_schema(json!({
        "otherVerificationConfig": {
            "textFields": [{"key": "license", "required": true}],
            "imageFields": ["scan"]
        }
    }));

    assert!(interpreter
        .validate(&field, &json!({"license": "AB-12", "scan": ["uploads/1.png"]}))
        .is_ok());
    assert_eq!(
        kind_of(&interpreter, &field, json!({"scan": "uploads/1.png"})),
        Some(ValidationErrorKind::MissingRequiredValue)
    );
    assert_eq!(
        kind_of(&interpreter, &field, json!({"license": "AB-12", "passport": "x"})),
        Some(ValidationErrorKind::OptionNotAllowed)
    );
    assert_eq!(
        kind_of(&interpreter, &field, json!({"license": ["AB-12"]})),
        Some(ValidationErrorKind::TypeMismatch)
    );
}

#[test]
fn test_relation() {
    let interpreter = FieldInterpreter::new();
    let single = create_test_field("owner", FieldType::Relation)
        .with_schema(json!({"relationConfig": {"directory": "people"}}));
    assert!(interpreter.validate(&single, &json!("c0ffee")).is_ok());
    assert!(interpreter.validate(&single, &json!(42)).is_ok());
    assert_eq!(
        kind_of(&interpreter, &single, json!(["a", "b"])),
        Some(ValidationErrorKind::TypeMismatch)
    );

    let multiple = create_test_field("owners", FieldType::Relation)
        .with_schema(json!({"relationConfig": {"directory": "people", "multiple": true}}));
    assert!(interpreter.validate(&multiple, &json!(["a", 2])).is_ok());
    assert_eq!(
        kind_of(&interpreter, &multiple, json!([1.5])),
        Some(ValidationErrorKind::TypeMismatch)
    );
}

#[test]
fn test_malformed_config_falls_back() {
    let interpreter = FieldInterpreter::new();
    let field = create_test_field("skills", FieldType::Skills)
        .with_schema(json!({"skillsConfig": {"allowedCategories": "A"}}));
    assert!(interpreter.validate(&field, &json!(["Z"])).is_ok());

    let strict = FieldInterpreter::with_config(InterpreterConfig::strict());
    assert_eq!(
        kind_of(&strict, &field, json!(["Z"])),
        Some(ValidationErrorKind::InvalidSchemaConfig)
    );
}
