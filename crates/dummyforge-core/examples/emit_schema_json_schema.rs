use dummyforge_core::FieldSpec;
use schemars::schema_for;

fn main() {
    let schema = schema_for!(Vec<FieldSpec>);
    let json = serde_json::to_string_pretty(&schema).expect("serialize json schema");
    println!("{json}");
}
