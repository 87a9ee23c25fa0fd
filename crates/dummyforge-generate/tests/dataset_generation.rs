use chrono::{DateTime, Utc};
use dummyforge_core::{FieldDefinition, GeneratorOptions, Locale};
use dummyforge_generate::{
    FakerProvider, GeneratedValue, GenerationEngine, generate_data, generate_dataset,
    generate_field_value,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use regex::Regex;
use serde_json::json;

fn fields(value: serde_json::Value) -> Vec<FieldDefinition> {
    serde_json::from_value(value).expect("parse fields")
}

fn field(value: serde_json::Value) -> FieldDefinition {
    serde_json::from_value(value).expect("parse field")
}

fn generate_one(definition: serde_json::Value, seed: u64) -> GeneratedValue {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let provider = FakerProvider::new(Locale::En);
    generate_field_value(&field(definition), &provider, &mut rng)
}

fn seeded(count: usize, seed: u64) -> GeneratorOptions {
    GeneratorOptions {
        item_count: count,
        language: Locale::En,
        seed: Some(seed),
    }
}

#[test]
fn returns_exactly_count_records_with_schema_keys() {
    let schema = fields(json!([
        {"id": "1", "name": "id", "type": "number"},
        {"id": "2", "name": "email", "type": "email"},
        {"id": "3", "name": "active", "type": "boolean"}
    ]));
    let records = generate_data(&schema, &seeded(7, 1));

    assert_eq!(records.len(), 7);
    for record in &records {
        assert_eq!(record.keys().collect::<Vec<_>>(), ["id", "email", "active"]);
    }
}

#[test]
fn zero_count_yields_no_records() {
    let schema = fields(json!([{"name": "x", "type": "string"}]));
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let provider = FakerProvider::new(Locale::En);
    assert!(generate_dataset(&schema, 0, &provider, &mut rng).is_empty());
}

#[test]
fn same_seed_reproduces_the_dataset() {
    let schema = fields(json!([
        {"name": "name", "type": "fullName"},
        {"name": "address", "type": "address"},
        {"name": "amount", "type": "currency", "options": {"decimals": 2}},
        {"name": "when", "type": "date"}
    ]));
    let first = GenerationEngine::new(seeded(5, 42)).run(&schema);
    let second = GenerationEngine::new(seeded(5, 42)).run(&schema);

    assert_eq!(first.seed, 42);
    assert_eq!(first.records, second.records);
}

#[test]
fn unseeded_runs_report_their_seed() {
    let schema = fields(json!([{"name": "n", "type": "number"}]));
    let options = GeneratorOptions {
        seed: None,
        ..GeneratorOptions::default()
    };
    let result = GenerationEngine::new(options).run(&schema);
    let replay = GenerationEngine::new(seeded(5, result.seed)).run(&schema);
    assert_eq!(result.records, replay.records);
}

#[test]
fn array_generates_exactly_array_length_items() {
    let value = generate_one(
        json!({
            "name": "codes",
            "type": "array",
            "options": {"arrayLength": 4},
            "itemDefinition": {"name": "item", "type": "productCode"}
        }),
        3,
    );
    let items = value.as_array().expect("array");
    assert_eq!(items.len(), 4);
    let code = Regex::new("^[A-Z0-9]{8}$").expect("regex");
    for item in items {
        assert!(code.is_match(item.as_str().expect("text")));
    }
}

#[test]
fn array_edge_cases() {
    let empty = generate_one(
        json!({
            "name": "none",
            "type": "array",
            "options": {"arrayLength": 0},
            "itemDefinition": {"name": "item", "type": "email"}
        }),
        1,
    );
    assert_eq!(empty, GeneratedValue::Array(Vec::new()));

    let no_item = generate_one(
        json!({"name": "bare", "type": "array", "options": {"arrayLength": 3}}),
        1,
    );
    assert_eq!(no_item, GeneratedValue::Array(Vec::new()));
}

#[test]
fn object_without_children_is_an_empty_mapping() {
    let value = generate_one(json!({"name": "meta", "type": "object", "fields": []}), 1);
    assert!(value.as_record().expect("object").is_empty());
}

#[test]
fn nested_objects_keep_child_order() {
    let value = generate_one(
        json!({
            "name": "customer",
            "type": "object",
            "fields": [
                {"name": "company", "type": "company"},
                {"name": "department", "type": "department"},
                {"name": "tags", "type": "array", "options": {"arrayLength": 2},
                 "itemDefinition": {"name": "item", "type": "color"}}
            ]
        }),
        8,
    );
    let record = value.as_record().expect("object");
    assert_eq!(record.keys().collect::<Vec<_>>(), ["company", "department", "tags"]);
    let colors = record.get("tags").and_then(GeneratedValue::as_array).expect("tags");
    let hex = Regex::new("^#[0-9A-Fa-f]{6}$").expect("regex");
    assert!(colors.iter().all(|color| hex.is_match(color.as_str().unwrap_or_default())));
}

#[test]
fn fixed_currency_range_is_exact() {
    for seed in 0..10 {
        let value = generate_one(
            json!({
                "name": "price",
                "type": "currency",
                "options": {"currencyType": "dollar", "min": 10, "max": 10, "decimals": 2}
            }),
            seed,
        );
        assert_eq!(value, GeneratedValue::Text("$10.00".to_string()));
    }
}

#[test]
fn currency_defaults_to_whole_yen() {
    let value = generate_one(json!({"name": "price", "type": "currency"}), 4);
    let text = value.as_str().expect("text");
    let pattern = Regex::new(r"^¥\d{1,3}(,\d{3})*$").expect("regex");
    assert!(pattern.is_match(text), "{text}");
}

#[test]
fn latitude_is_a_bare_number() {
    let value = generate_one(
        json!({"name": "lat", "type": "latLong", "options": {"latLongType": "latitude"}}),
        6,
    );
    let GeneratedValue::Float(latitude) = value else {
        panic!("expected a number, got {value:?}");
    };
    assert!((-90.0..=90.0).contains(&latitude));
}

#[test]
fn unknown_type_yields_empty_string() {
    let value = generate_one(json!({"name": "mystery", "type": "hologram"}), 1);
    assert_eq!(value, GeneratedValue::Text(String::new()));
}

#[test]
fn numbers_and_dates_respect_their_bounds() {
    let schema = fields(json!([
        {"name": "n", "type": "number", "options": {"range": {"min": -5, "max": 5}}},
        {"name": "sales", "type": "sales"},
        {"name": "day", "type": "date",
         "options": {"startDate": "2024-03-01", "endDate": "2024-03-02"}}
    ]));
    let start: DateTime<Utc> = "2024-03-01T00:00:00Z".parse().expect("start");
    let end: DateTime<Utc> = "2024-03-02T23:59:59.999Z".parse().expect("end");

    for record in generate_data(&schema, &seeded(50, 9)) {
        let n = record.get("n").and_then(GeneratedValue::as_i64).expect("n");
        assert!((-5..=5).contains(&n));
        let sales = record.get("sales").and_then(GeneratedValue::as_i64).expect("sales");
        assert!((10_000..=1_000_000).contains(&sales));
        let day = record
            .get("day")
            .and_then(GeneratedValue::as_timestamp)
            .expect("day");
        assert!(day >= start && day <= end, "{day}");
    }
}

#[test]
fn percentage_is_two_decimal_bounded() {
    for seed in 0..20 {
        let value = generate_one(json!({"name": "p", "type": "percentage"}), seed);
        let percent = value.as_f64().expect("number");
        assert!((0.0..=100.0).contains(&percent));
        assert_eq!((percent * 100.0).round() / 100.0, percent);
    }
}

#[test]
fn ip_versions_follow_options() {
    let v4 = generate_one(json!({"name": "ip", "type": "ipAddress"}), 2);
    assert!(v4.as_str().expect("text").parse::<std::net::Ipv4Addr>().is_ok());

    let v6 = generate_one(
        json!({"name": "ip", "type": "ipAddress", "options": {"ipVersion": "IPv6"}}),
        2,
    );
    assert!(v6.as_str().expect("text").parse::<std::net::Ipv6Addr>().is_ok());
}

#[test]
fn plain_categories_stay_ascii_in_japanese() {
    let schema = fields(json!([
        {"name": "email", "type": "email"},
        {"name": "url", "type": "url"}
    ]));
    let options = GeneratorOptions {
        item_count: 5,
        language: Locale::Ja,
        seed: Some(13),
    };
    let email = Regex::new(r"^[^@\s]+@[^@\s]+\.[a-z]+$").expect("regex");
    for record in generate_data(&schema, &options) {
        let address = record.get("email").and_then(GeneratedValue::as_str).expect("email");
        assert!(email.is_match(address), "{address}");
        let url = record.get("url").and_then(GeneratedValue::as_str).expect("url");
        assert!(url.starts_with("https://www.") && url.is_ascii(), "{url}");
    }
}

#[test]
fn duplicate_names_keep_first_position_and_last_value() {
    let schema = fields(json!([
        {"name": "x", "type": "number", "options": {"range": {"min": 1, "max": 1}}},
        {"name": "y", "type": "boolean"},
        {"name": "x", "type": "number", "options": {"range": {"min": 2, "max": 2}}}
    ]));
    let records = generate_data(&schema, &seeded(1, 0));
    assert_eq!(records[0].keys().collect::<Vec<_>>(), ["x", "y"]);
    assert_eq!(records[0].get("x"), Some(&GeneratedValue::Int(2)));
}
