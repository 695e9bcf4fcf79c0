use field_schema::schema::merge_patch;
use field_schema::testing::{
    create_test_directory, create_test_field, ConfigIssue, DirectoryDefinition, FieldInterpreter,
    FieldType, FieldUpdate, SchemaError, ValidationErrorKind, Widget,
};
use serde_json::json;

#[test]
fn test_patch_schema_keeps_existing_keys() {
    let mut directory = create_test_directory();
    directory
        .patch_field_schema("skills", &json!({"skillsConfig": {"customCategories": ["Ops"]}}))
        .unwrap();

    let schema = &directory.field("skills").unwrap().schema;
    assert_eq!(
        schema,
        &json!({"skillsConfig": {
            "allowedCategories": ["Engineering", "Design"],
            "customCategories": ["Ops"]
        }})
    );

    let interpreter = FieldInterpreter::new();
    let field = directory.field("skills").unwrap();
    assert!(interpreter.validate(field, &json!([{"category": "Ops"}])).is_ok());
}

#[test]
fn test_patch_null_removes_key() {
    let mut schema = json!({"a": 1, "b": {"c": 2, "d": 3}});
    merge_patch(&mut schema, &json!({"a": null, "b": {"d": null, "e": [1]}})).unwrap();
    assert_eq!(schema, json!({"b": {"c": 2, "e": [1]}}));
}

#[test]
fn test_patch_must_be_object() {
    let mut directory = create_test_directory();
    assert!(matches!(
        directory.patch_field_schema("skills", &json!(["x"])),
        Err(SchemaError::InvalidPatch(_))
    ));
    assert!(matches!(
        directory.patch_field_schema("missing", &json!({})),
        Err(SchemaError::NotFound(_))
    ));
}

#[test]
fn test_update_field() {
    let mut directory = create_test_directory();
    let update = FieldUpdate {
        label: Some("Full name".to_string()),
        validators: Some(json!({"maxLength": 3})),
        sort_order: Some(10),
        ..FieldUpdate::default()
    };
    let field = directory.update_field("name", update).unwrap();
    assert_eq!(field.label, "Full name");

    let keys: Vec<_> = directory.fields().iter().map(|f| f.key.as_str()).collect();
    assert_eq!(keys, vec!["email", "skills", "name"]);

    let interpreter = FieldInterpreter::new();
    let err = interpreter
        .validate(directory.field("name").unwrap(), &json!("Grace"))
        .unwrap_err();
    assert_eq!(err.kind, ValidationErrorKind::OutOfRange);
}

#[test]
fn test_update_rejects_inconsistent_validators() {
    let mut directory = create_test_directory();
    let update = FieldUpdate {
        validators: Some(json!({"min": 5, "max": 1})),
        ..FieldUpdate::default()
    };
    assert!(directory.update_field("name", update).is_err());
    assert_eq!(directory.field("name").unwrap().validators, json!({}));
}

#[test]
fn test_duplicate_keys_rejected() {
    let mut directory = create_test_directory();
    let result = directory.add_field(create_test_field("email", FieldType::Text));
    assert!(matches!(result, Err(SchemaError::DuplicateKey(key)) if key == "email"));
}

#[test]
fn test_remove_field() {
    let mut directory = create_test_directory();
    let removed = directory.remove_field("email").unwrap();
    assert_eq!(removed.key, "email");
    assert!(directory.field("email").is_none());
    assert!(directory.field_by_id(removed.id).is_none());
}

#[test]
fn test_from_json_orders_fields() {
    let directory = DirectoryDefinition::from_json(
        r#"{
            "title": "Jobs",
            "slug": "jobs",
            "fields": [
                {"key": "salary", "type": "currency", "sort_order": 2},
                {"key": "title", "type": "text", "sortOrder": 1, "required": true}
            ]
        }"#,
    )
    .unwrap();
    let keys: Vec<_> = directory.fields().iter().map(|f| f.key.as_str()).collect();
    assert_eq!(keys, vec!["title", "salary"]);
}

#[test]
fn test_from_json_rejects_bad_slug() {
    let result = DirectoryDefinition::from_json(r#"{"title": "Jobs", "slug": "Jobs Board"}"#);
    assert!(matches!(result, Err(SchemaError::InvalidDirectory(_))));
}

#[test]
fn test_validate_record() {
    let interpreter = FieldInterpreter::new();
    let directory = create_test_directory();

    let report = interpreter
        .validate_record(&directory, &json!({"name": "Ada", "skills": ["Engineering"]}))
        .unwrap();
    assert!(report.is_valid());

    let report = interpreter
        .validate_record(
            &directory,
            &json!({"email": "ada", "skills": [{"category": "Sales"}], "age": 36}),
        )
        .unwrap();
    assert!(!report.is_valid());
    assert_eq!(report.errors.len(), 3);
    assert_eq!(
        report.error_for("skills").map(|e| e.kind),
        Some(ValidationErrorKind::OptionNotAllowed)
    );
    assert_eq!(report.unknown_keys, vec!["age".to_string()]);
}

#[test]
fn test_describe_form_is_idempotent() {
    let interpreter = FieldInterpreter::new();
    let directory = create_test_directory();

    let first = interpreter.describe_form(&directory);
    let second = interpreter.describe_form(&directory);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );

    let widgets: Vec<_> = first.iter().map(|spec| spec.widget).collect();
    assert_eq!(
        widgets,
        vec![Widget::TextInput, Widget::EmailInput, Widget::SkillsPicker]
    );
    assert!(first[0].required);
}

#[test]
fn test_describe_for_render_without_config() {
    let interpreter = FieldInterpreter::new();
    let field = create_test_field("skills", FieldType::Skills);
    let spec = interpreter.describe_for_render(&field);
    assert!(spec.options.is_empty());
    assert_eq!(spec.props["restrictCategories"], json!(false));
    assert_eq!(interpreter.describe_for_render(&field), spec);
}

#[test]
fn test_render_spec_wire_format() {
    let interpreter = FieldInterpreter::new();
    let field = create_test_field("bio", FieldType::Textarea)
        .with_validators(json!({"maxLength": 200}))
        .with_schema(json!({"textConfig": {"maxLength": 120, "placeholder": "About you"}}));
    let value = serde_json::to_value(interpreter.describe_for_render(&field)).unwrap();

    assert_eq!(value["type"], json!("textarea"));
    assert_eq!(value["widget"], json!("text_area"));
    assert_eq!(value["constraints"]["maxLength"], json!(120));
    assert_eq!(value["props"]["placeholder"], json!("About you"));
    assert_eq!(value["configSource"], json!("stored"));
}

#[test]
fn test_diagnose() {
    let interpreter = FieldInterpreter::new();
    let mut directory = create_test_directory();
    directory
        .add_field(create_test_field("choice", FieldType::Select))
        .unwrap();
    directory
        .add_field(
            create_test_field("code", FieldType::Text).with_validators(json!({"pattern": "("})),
        )
        .unwrap();

    let diagnostics = interpreter.diagnose(&directory);
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics[0].key, "choice");
    assert!(matches!(
        &diagnostics[0].issue,
        ConfigIssue::MissingConfig { expected } if expected == "selectConfig"
    ));
    assert!(matches!(diagnostics[1].issue, ConfigIssue::InvalidValidators { .. }));
}
