pub mod csv;
pub mod json;
pub mod jsonl;
pub mod yaml;

use serde_json::Value;

use crate::domain::record::{Record, field_path};
use crate::io::IoError;

/// Convert one parsed document into a [`Record`], coercing scalar values to
/// their string rendering. Form values are strings on the wire; numbers and
/// booleans in JSON/YAML input coerce, nested values are rejected.
pub(crate) fn record_from_value(index: usize, value: Value) -> Result<Record, IoError> {
    let Value::Object(map) = value else {
        return Err(IoError::NonObjectRecord { index });
    };
    let mut record = Record::new();
    for (field, value) in map {
        let rendered = match value {
            Value::Null => String::new(),
            Value::Bool(flag) => flag.to_string(),
            Value::Number(number) => number.to_string(),
            Value::String(text) => text,
            Value::Array(_) | Value::Object(_) => {
                return Err(IoError::NonScalarField {
                    path: field_path(index, &field),
                });
            }
        };
        record.insert(field, rendered);
    }
    Ok(record)
}
