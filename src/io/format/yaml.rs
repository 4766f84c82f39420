use std::io::{Read, Write};

use serde_json::Value;

use crate::domain::record::Record;
use crate::io::IoError;
use crate::io::format::record_from_value;

pub fn read_yaml<R: Read>(reader: R) -> Result<Vec<Record>, IoError> {
    let yaml_value: serde_yaml::Value = serde_yaml::from_reader(reader)?;
    let json_value = serde_json::to_value(yaml_value)?;
    let documents = match json_value {
        Value::Array(items) => items,
        single => vec![single],
    };
    documents
        .into_iter()
        .enumerate()
        .map(|(index, document)| record_from_value(index, document))
        .collect()
}

pub fn write_yaml<W: Write>(writer: W, records: &[Record]) -> Result<(), IoError> {
    if records.len() == 1 {
        serde_yaml::to_writer(writer, &records[0])?;
    } else {
        serde_yaml::to_writer(writer, records)?;
    }
    Ok(())
}
