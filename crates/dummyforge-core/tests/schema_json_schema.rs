use dummyforge_core::FieldSpec;
use schemars::schema_for;

#[test]
fn json_schema_describes_wire_keys() {
    let generated = schema_for!(FieldSpec);
    let generated_json = serde_json::to_value(&generated).expect("serialize generated schema");

    let properties = generated_json
        .pointer("/properties")
        .or_else(|| generated_json.pointer("/definitions/FieldSpec/properties"))
        .and_then(|value| value.as_object())
        .expect("field spec properties");

    for key in ["id", "name", "type", "options", "fields", "itemDefinition"] {
        assert!(properties.contains_key(key), "missing property {key}");
    }
    assert!(!properties.contains_key("item_definition"));
}
