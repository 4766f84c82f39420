use std::collections::BTreeMap;

/// One form submission: flat, string-valued fields keyed by field name.
///
/// `BTreeMap` keeps field order deterministic through serialization.
pub type Record = BTreeMap<String, String>;

/// Render the report path for a field of the record at `index`.
pub fn field_path(index: usize, field: &str) -> String {
    format!("$[{index}].{field}")
}
