use serde_json::Value;

use crate::error::{Result, ShelfError};
use crate::models::FileRecord;

/// Result of decoding the collection payload. Malformed elements are dropped
/// and counted rather than failing the whole fetch; the first decode error is
/// kept for diagnostics.
#[derive(Debug, Clone, Default)]
pub struct FetchOutcome {
    pub records: Vec<FileRecord>,
    pub skipped_records: usize,
    pub first_error: Option<(usize, String)>,
}

/// Decodes the `/files/all` response body. The payload must be a JSON array;
/// anything else rejects the fetch outright.
pub fn decode_record_array(payload: &Value) -> Result<FetchOutcome> {
    let Some(items) = payload.as_array() else {
        return Err(ShelfError::Deserialization(format!(
            "expected a JSON array of file records, got {}",
            json_kind(payload)
        )));
    };

    let mut outcome = FetchOutcome::default();
    for (index, item) in items.iter().enumerate() {
        match FileRecord::deserialize_value(item) {
            Ok(record) => outcome.records.push(record),
            Err(err) => {
                outcome.skipped_records += 1;
                if outcome.first_error.is_none() {
                    outcome.first_error = Some((index, err.to_string()));
                }
            }
        }
    }
    Ok(outcome)
}

impl FileRecord {
    fn deserialize_value(value: &Value) -> serde_json::Result<Self> {
        serde_json::from_value(value.clone())
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
