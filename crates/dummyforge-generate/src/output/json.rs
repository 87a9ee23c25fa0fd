use crate::errors::OutputError;
use crate::record::Record;

/// Pretty JSON array with two-space indentation, keys in record order.
pub fn format_json(records: &[Record]) -> Result<String, OutputError> {
    Ok(serde_json::to_string_pretty(records)?)
}
