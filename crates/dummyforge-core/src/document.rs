use std::path::Path;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::schema::{DataSetDefinition, FieldDefinition};

/// Text syntax of a schema or sample document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaSyntax {
    Json,
    Yaml,
}

impl SchemaSyntax {
    /// Detect the syntax from a file extension (`.json`, `.yaml`, `.yml`).
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Parse a document into a generic JSON value regardless of its syntax.
pub fn parse_document(content: &str, syntax: SchemaSyntax) -> Result<Value> {
    let value = match syntax {
        SchemaSyntax::Json => serde_json::from_str(content)?,
        SchemaSyntax::Yaml => serde_yaml::from_str(content)?,
    };
    Ok(value)
}

/// Load a schema: either a bare array of fields or a dataset document.
pub fn load_schema_str(content: &str, syntax: SchemaSyntax) -> Result<DataSetDefinition> {
    let value = parse_document(content, syntax)?;
    match value {
        Value::Array(_) => {
            let fields: Vec<FieldDefinition> = serde_json::from_value(value)?;
            Ok(DataSetDefinition {
                name: String::new(),
                fields,
            })
        }
        Value::Object(ref map) if map.contains_key("fields") => {
            Ok(serde_json::from_value(value)?)
        }
        other => Err(Error::InvalidDocument(format!(
            "expected an array of fields or an object with `fields`, found {}",
            value_kind(&other)
        ))),
    }
}

/// Load a schema file, picking the syntax from its extension.
pub fn load_schema_file(path: &Path) -> Result<DataSetDefinition> {
    let syntax = syntax_for(path)?;
    let content = std::fs::read_to_string(path)?;
    load_schema_str(&content, syntax)
}

/// Read and parse any JSON/YAML document from disk.
pub fn read_document(path: &Path) -> Result<Value> {
    let syntax = syntax_for(path)?;
    let content = std::fs::read_to_string(path)?;
    parse_document(&content, syntax)
}

fn syntax_for(path: &Path) -> Result<SchemaSyntax> {
    SchemaSyntax::from_path(path).ok_or_else(|| {
        Error::InvalidDocument(format!(
            "unsupported file extension for {}: expected .json, .yaml or .yml",
            path.display()
        ))
    })
}

pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
