use docom::{
    Entity, FieldAccessor, FieldDecl, FieldErrors, FieldType, MapEntity, MappingBuilder, NumericProperty,
    ObjectProperty, ParamRequest, Property, RecordingDiagnostics, StringProperty,
};
use serde_json::json;

fn string_property(entity_type: &str, name: &str) -> StringProperty {
    StringProperty::new(FieldAccessor::bind(entity_type, FieldDecl::new(name, FieldType::String)))
}

fn age_property() -> NumericProperty {
    NumericProperty::new(FieldAccessor::bind(
        "User",
        FieldDecl::new("age", FieldType::Integer).primitive().required(),
    ))
}

#[test]
fn null_allowed_follows_primitiveness_and_required() {
    let cases = [
        (FieldDecl::new("nickName", FieldType::String), true),
        (FieldDecl::new("nickName", FieldType::String).required(), false),
        (FieldDecl::new("age", FieldType::Integer).primitive(), false),
        (FieldDecl::new("age", FieldType::Integer).primitive().required(), false),
    ];
    for (decl, expected) in cases {
        let property = StringProperty::new(FieldAccessor::bind("User", decl.clone()));
        assert_eq!(property.null_allowed(), expected, "decl: {decl:?}");
    }
}

#[test]
fn default_mapping_is_exact_match_and_unstored() {
    let property = string_property("User", "email");
    let mut builder = MappingBuilder::new();
    property.create_mapping(&mut builder).expect("mapping");
    assert_eq!(
        builder.fragment("email"),
        Some(&json!({"type": "string", "store": "no", "index": "not_analyzed"}))
    );
}

#[test]
fn identity_transforms_round_trip() {
    let property = string_property("User", "email");
    let value = json!("ann@example.com");
    let stored = property.transform_to_source(value.clone());
    assert_eq!(property.transform_from_source(stored), value);
}

#[test]
fn object_transforms_round_trip_through_serialized_text() {
    let property = ObjectProperty::new(FieldAccessor::bind("User", FieldDecl::new("profile", FieldType::Object)));
    let value = json!({"theme": "dark", "sidebar": true});
    let stored = property.transform_to_source(value.clone());
    assert!(stored.is_string());
    assert_eq!(property.transform_from_source(stored), value);
    assert!(property.is_stored());
}

#[test]
fn missing_parameter_leaves_field_untouched() {
    let property = string_property("User", "nickName");
    let mut entity = MapEntity::new("User").with_field("nickName", json!("snowy"));
    let ctx = ParamRequest::new().with("name", "Ann");
    let mut errors = FieldErrors::new();
    let diag = RecordingDiagnostics::new();

    property
        .read_from_request(&mut entity, &ctx, &mut errors, &diag)
        .expect("absent parameter binds nothing");
    assert_eq!(entity.field("nickName"), Some(&json!("snowy")));
    assert!(errors.is_empty());
}

#[test]
fn empty_string_clears_non_primitive_field() {
    let property = string_property("User", "nickName");
    let mut entity = MapEntity::new("User").with_field("nickName", json!("snowy"));
    let ctx = ParamRequest::new().with("nickName", "");
    let mut errors = FieldErrors::new();
    let diag = RecordingDiagnostics::new();

    property
        .read_from_request(&mut entity, &ctx, &mut errors, &diag)
        .expect("empty string is a legal absent value here");
    assert_eq!(entity.field("nickName"), Some(&json!(null)));
    assert!(errors.is_empty());
}

#[test]
fn empty_string_on_primitive_field_is_a_validation_failure() {
    let property = age_property();
    let mut entity = MapEntity::new("User").with_field("age", json!(30));
    let ctx = ParamRequest::new().with("age", "");
    let mut errors = FieldErrors::new();
    let diag = RecordingDiagnostics::new();

    let err = property
        .read_from_request(&mut entity, &ctx, &mut errors, &diag)
        .expect_err("empty string cannot coerce into a primitive");
    assert_eq!(err.field, "User.age");
    assert_eq!(err.value, "");
    assert_eq!(entity.field("age"), Some(&json!(30)));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.errors()[0].field, "age");
    assert_eq!(errors.errors()[0].value, "");
}

#[test]
fn unparseable_value_registers_field_error_and_aborts() {
    let property = age_property();
    let mut entity = MapEntity::new("User").with_field("age", json!(30));
    let ctx = ParamRequest::new().with("age", "abc");
    let mut errors = FieldErrors::new();
    let diag = RecordingDiagnostics::new();

    let err = property
        .read_from_request(&mut entity, &ctx, &mut errors, &diag)
        .expect_err("expected validation failure");
    assert_eq!(err.field, "User.age");
    assert_eq!(err.value, "abc");
    assert_eq!(entity.field("age"), Some(&json!(30)));
    assert_eq!(errors.errors()[0].value, "abc");

    let payload = serde_json::to_value(&err).expect("payload");
    assert_eq!(
        payload,
        json!({"templateKey": "Property.invalidInput", "field": "User.age", "value": "abc"})
    );
}

#[test]
fn valid_value_is_coerced_and_assigned() {
    let property = age_property();
    let mut entity = MapEntity::new("User").with_field("age", json!(30));
    let ctx = ParamRequest::new().with("age", "31");
    let mut errors = FieldErrors::new();
    let diag = RecordingDiagnostics::new();

    property
        .read_from_request(&mut entity, &ctx, &mut errors, &diag)
        .expect("valid value binds");
    assert_eq!(entity.field("age"), Some(&json!(31)));
    assert!(errors.is_empty());
    assert!(diag.is_empty());
}

#[test]
fn denied_read_degrades_to_absent_and_is_reported() {
    // The entity never declared the field, so every access is denied.
    let property = string_property("User", "secret");
    let entity = MapEntity::new("User");
    let diag = RecordingDiagnostics::new();

    let stored = property.write_to_source(&entity, &diag);
    assert_eq!(stored, json!(null));
    let reports = diag.take();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].field, "secret");
}

#[test]
fn denied_write_skips_field_and_source_map() {
    let property = string_property("User", "secret");
    let mut entity = MapEntity::new("User");
    let diag = RecordingDiagnostics::new();

    property.read_from_source(&mut entity, json!("hidden"), &diag);
    assert!(entity.source("secret").is_none());
    assert_eq!(diag.len(), 1);
}

#[test]
fn loaded_value_lands_in_field_and_source_map() {
    let property = string_property("User", "email");
    let mut entity = MapEntity::new("User").with_field("email", json!(null));
    let diag = RecordingDiagnostics::new();

    property.read_from_source(&mut entity, json!("ann@example.com"), &diag);
    assert_eq!(entity.field("email"), Some(&json!("ann@example.com")));
    assert_eq!(entity.source("email"), Some(&json!("ann@example.com")));
    assert!(diag.is_empty());
}

#[test]
fn denied_write_during_binding_stays_fail_soft() {
    // Coercion succeeds, the entity denies the write: logged, not raised.
    let property = string_property("User", "secret");
    let mut entity = MapEntity::new("User");
    let ctx = ParamRequest::new().with("secret", "value");
    let mut errors = FieldErrors::new();
    let diag = RecordingDiagnostics::new();

    property
        .read_from_request(&mut entity, &ctx, &mut errors, &diag)
        .expect("access failures never surface from binding");
    assert!(errors.is_empty());
    assert_eq!(diag.len(), 1);
}

#[test]
fn base_contract_accepts_setters() {
    assert!(string_property("User", "email").accepts_setter());
}
