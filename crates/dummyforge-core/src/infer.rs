//! Schema inference from a sample record.
//!
//! Types are read off the sample values structurally; no options are
//! inferred except `arrayLength`, which mirrors the sample's length.

use serde_json::{Map, Value};

use crate::document::value_kind;
use crate::error::{Error, Result};
use crate::options::IntRange;
use crate::schema::{ArrayItems, FieldDefinition, FieldKind};

/// Name given to the item template of an inferred array.
pub const ARRAY_ITEM_NAME: &str = "item";

/// Infer fields from a sample document.
///
/// A non-empty top-level array contributes its first element as the sample.
pub fn infer_schema(sample: &Value) -> Result<Vec<FieldDefinition>> {
    let record = match sample {
        Value::Array(items) => items.first().unwrap_or(sample),
        other => other,
    };
    match record {
        Value::Object(map) => Ok(infer_fields(map)),
        other => Err(Error::InvalidDocument(format!(
            "schema inference needs an object or an array of objects, found {}",
            value_kind(other)
        ))),
    }
}

/// Infer one field per key, in key order.
pub fn infer_fields(map: &Map<String, Value>) -> Vec<FieldDefinition> {
    map.iter()
        .map(|(key, value)| infer_field(key, value))
        .collect()
}

pub fn infer_field(key: &str, value: &Value) -> FieldDefinition {
    let kind = match value {
        Value::String(_) => FieldKind::String,
        Value::Number(_) => FieldKind::Number(IntRange::NUMBER_DEFAULT),
        Value::Bool(_) => FieldKind::Boolean,
        Value::Array(items) => FieldKind::Array(ArrayItems {
            item: items
                .first()
                .map(|first| Box::new(infer_field(ARRAY_ITEM_NAME, first))),
            length: items.len(),
        }),
        Value::Object(map) => FieldKind::Object(infer_fields(map)),
        Value::Null => FieldKind::String,
    };
    FieldDefinition {
        id: format!("{key}-{}", uuid::Uuid::new_v4()),
        name: key.to_string(),
        kind,
    }
}
