use std::collections::HashSet;

use crate::schema::{FieldDefinition, FieldKind};

/// Non-fatal finding about a schema. Generation proceeds regardless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaWarning {
    pub code: &'static str,
    /// Dotted path of field names from the root (`customer.tags[]`).
    pub path: String,
    pub message: String,
}

impl SchemaWarning {
    fn new(code: &'static str, path: String, message: String) -> Self {
        Self {
            code,
            path,
            message,
        }
    }
}

/// Collect warnings for duplicate names, unknown types and item-less arrays.
pub fn lint_schema(fields: &[FieldDefinition]) -> Vec<SchemaWarning> {
    let mut warnings = Vec::new();
    lint_level(fields, "", &mut warnings);
    warnings
}

fn lint_level(fields: &[FieldDefinition], prefix: &str, warnings: &mut Vec<SchemaWarning>) {
    let mut seen = HashSet::new();
    for field in fields {
        let path = join_path(prefix, &field.name);
        if !seen.insert(field.name.as_str()) {
            warnings.push(SchemaWarning::new(
                "duplicate_name",
                path.clone(),
                format!("field name '{}' repeats; the later field wins", field.name),
            ));
        }
        lint_field(field, path, warnings);
    }
}

fn lint_field(field: &FieldDefinition, path: String, warnings: &mut Vec<SchemaWarning>) {
    match &field.kind {
        FieldKind::Unknown(tag) => warnings.push(SchemaWarning::new(
            "unknown_type",
            path,
            format!("unknown type '{tag}' generates empty strings"),
        )),
        FieldKind::Object(children) => lint_level(children, &path, warnings),
        FieldKind::Array(items) => match &items.item {
            Some(item) => lint_field(item, format!("{path}[]"), warnings),
            None => warnings.push(SchemaWarning::new(
                "array_without_item",
                path,
                "array has no item definition and generates empty arrays".to_string(),
            )),
        },
        _ => {}
    }
}

fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}
