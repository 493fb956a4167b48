use std::collections::HashMap;

use ldapi_models::{
    CustomProperty, CustomPropertyValues, Error, FieldPolicy, JsonCodec, Model,
};
use pretty_assertions::assert_eq;

type Result<T = (), E = Box<dyn std::error::Error>> = std::result::Result<T, E>;

#[test]
fn documented_example_renders() {
    let property = CustomProperty::new().with_name("My property");

    assert_eq!(
        property.to_string(),
        "class CustomProperty {\n    name: My property\n    value: null\n}"
    );
}

#[test]
fn properties_from_a_flag_payload() -> Result {
    // Custom properties arrive keyed by property key on a feature flag
    let payload = r#"{
        "jira.issues": { "name": "Jira issues", "value": ["APP-1", "APP-2"] },
        "owner": { "name": "Owner", "value": ["platform-team"] },
        "draft": { "name": "Draft" }
    }"#;

    let decoded: HashMap<String, CustomProperty> = serde_json::from_str(payload)?;
    assert_eq!(decoded.len(), 3);
    assert_eq!(decoded["owner"].name(), Some("Owner"));
    assert_eq!(decoded["draft"].value(), None);

    let jira = &decoded["jira.issues"];
    let issues: Vec<&str> = jira
        .value()
        .map(|v| v.iter().map(String::as_str).collect())
        .unwrap_or_default();
    assert_eq!(issues, ["APP-1", "APP-2"]);

    Ok(())
}

#[test]
fn strict_codec_round_trips_valid_properties() -> Result {
    let codec = JsonCodec::new().with_policy(FieldPolicy::RequireFields);
    let property = CustomProperty::new()
        .with_name("Owner")
        .with_value(CustomPropertyValues::new().with("platform-team"));

    let bytes = codec.encode_to_vec(&property)?;
    let back: CustomProperty = codec.decode(&bytes)?;
    assert_eq!(back, property);
    back.validate()?;

    Ok(())
}

#[test]
fn lenient_codec_accepts_what_strict_rejects() {
    let json = r#"{"value": ["v"]}"#;

    let lenient = JsonCodec::new().decode_str::<CustomProperty>(json);
    assert!(lenient.is_ok());

    let strict = JsonCodec::new()
        .with_policy(FieldPolicy::RequireFields)
        .decode_str::<CustomProperty>(json);
    assert!(matches!(
        strict,
        Err(Error::MissingField {
            model: "CustomProperty",
            field: "name"
        })
    ));
}

#[test]
fn properties_work_as_map_keys() {
    let mut counts: HashMap<CustomProperty, usize> = HashMap::new();
    for name in ["a", "b", "a", "a"] {
        *counts
            .entry(CustomProperty::new().with_name(name))
            .or_default() += 1;
    }

    assert_eq!(counts[&CustomProperty::new().with_name("a")], 3);
    assert_eq!(counts[&CustomProperty::new().with_name("b")], 1);
}

#[test]
fn dynamic_equality_checks_the_type() {
    let values = CustomPropertyValues::from_iter(["v"]);
    let property = CustomProperty::new().with_value(values.clone());

    assert!(values.eq_any(&values.clone()));
    assert!(!values.eq_any(&property));
    assert!(!property.eq_any(&values));
    assert!(!property.eq_any(&()));
}
