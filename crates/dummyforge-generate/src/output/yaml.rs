use crate::errors::OutputError;
use crate::record::Record;

/// Block-style YAML sequence of records, keys in record order.
pub fn format_yaml(records: &[Record]) -> Result<String, OutputError> {
    Ok(serde_yaml::to_string(records)?)
}
