use crate::errors::OutputError;
use crate::record::{GeneratedValue, Record, iso_timestamp};

/// Render records as CSV: one header line, then one line per non-empty record.
///
/// Columns are the union of record keys in first-appearance order; a record
/// without a column gets an empty cell. No columns at all yields `""`.
pub fn format_csv(records: &[Record]) -> Result<String, OutputError> {
    let columns = collect_columns(records);
    if columns.is_empty() {
        return Ok(String::new());
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(&columns)?;

    for record in records.iter().filter(|record| !record.is_empty()) {
        let mut cells = flatten_record(record);
        let row: Vec<String> = columns
            .iter()
            .map(|column| {
                cells
                    .iter_mut()
                    .find(|(key, _)| key == column)
                    .map(|(_, cell)| std::mem::take(cell))
                    .unwrap_or_default()
            })
            .collect();
        writer.write_record(&row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Flatten one record into `(column, cell)` pairs in key order.
pub fn flatten_record(record: &Record) -> Vec<(String, String)> {
    record
        .iter()
        .map(|(key, value)| (key.to_string(), cell_text(value)))
        .collect()
}

/// Text of a single CSV cell.
pub fn cell_text(value: &GeneratedValue) -> String {
    match value {
        GeneratedValue::Null => "null".to_string(),
        GeneratedValue::Bool(value) => value.to_string(),
        GeneratedValue::Int(value) => value.to_string(),
        GeneratedValue::Float(value) => value.to_string(),
        GeneratedValue::Text(value) => value.clone(),
        GeneratedValue::Timestamp(value) => iso_timestamp(value),
        GeneratedValue::Object(record) => match coordinate_pair(record) {
            Some((latitude, longitude)) => {
                format!("{},{}", cell_text(latitude), cell_text(longitude))
            }
            None => compact_json(value),
        },
        GeneratedValue::Array(_) => compact_json(value),
    }
}

/// A mapping whose keys are exactly `latitude` and `longitude`.
fn coordinate_pair(record: &Record) -> Option<(&GeneratedValue, &GeneratedValue)> {
    if record.len() != 2 {
        return None;
    }
    Some((record.get("latitude")?, record.get("longitude")?))
}

fn compact_json(value: &GeneratedValue) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

fn collect_columns(records: &[Record]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for key in records.iter().flat_map(|record| record.keys()) {
        if !columns.iter().any(|column| column == key) {
            columns.push(key.to_string());
        }
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(entries: &[(&str, GeneratedValue)]) -> Record {
        entries
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn coordinate_objects_need_exactly_two_keys() {
        let pair = record(&[
            ("latitude", GeneratedValue::Float(35.6)),
            ("longitude", GeneratedValue::Float(139.7)),
        ]);
        assert_eq!(cell_text(&GeneratedValue::Object(pair)), "35.6,139.7");

        let extra = record(&[
            ("latitude", GeneratedValue::Float(1.0)),
            ("longitude", GeneratedValue::Float(2.0)),
            ("label", GeneratedValue::Text("x".to_string())),
        ]);
        assert_eq!(
            cell_text(&GeneratedValue::Object(extra)),
            r#"{"latitude":1.0,"longitude":2.0,"label":"x"}"#
        );
    }

    #[test]
    fn flatten_keeps_key_order() {
        let flat = flatten_record(&record(&[
            ("b", GeneratedValue::Bool(true)),
            ("a", GeneratedValue::Null),
        ]));
        assert_eq!(
            flat,
            vec![
                ("b".to_string(), "true".to_string()),
                ("a".to_string(), "null".to_string())
            ]
        );
    }

    #[test]
    fn rows_follow_column_order_with_flattened_cells() {
        let first = record(&[
            ("id", GeneratedValue::Int(1)),
            ("tags", GeneratedValue::Array(vec![GeneratedValue::Int(2)])),
        ]);
        let second = record(&[
            ("tags", GeneratedValue::Array(Vec::new())),
            ("id", GeneratedValue::Int(3)),
        ]);
        assert_eq!(
            format_csv(&[first, second]).expect("csv"),
            "id,tags\n1,[2]\n3,[]\n"
        );
    }

    #[test]
    fn no_columns_renders_nothing() {
        assert_eq!(format_csv(&[Record::new(), Record::new()]).expect("csv"), "");
        assert_eq!(format_csv(&[]).expect("csv"), "");
    }
}
