pub mod csv;
pub mod json;
pub mod yaml;

use dummyforge_core::OutputFormat;
use tracing::warn;

use crate::errors::OutputError;
use crate::record::Record;

pub use self::csv::{cell_text, flatten_record, format_csv};
pub use self::json::format_json;
pub use self::yaml::format_yaml;

/// Serialize records in the requested format.
pub fn format_output(records: &[Record], format: OutputFormat) -> Result<String, OutputError> {
    match format {
        OutputFormat::Json => format_json(records),
        OutputFormat::Yaml => format_yaml(records),
        OutputFormat::Csv => format_csv(records),
    }
}

/// Like [`format_output`], keyed by tag. An unrecognized tag renders `""`.
pub fn format_output_tag(records: &[Record], tag: &str) -> Result<String, OutputError> {
    match OutputFormat::parse(tag) {
        Some(format) => format_output(records, format),
        None => {
            warn!(event = "unsupported_format", format = tag, "unsupported output format");
            Ok(String::new())
        }
    }
}
