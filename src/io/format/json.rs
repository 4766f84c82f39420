use std::io::{Read, Write};

use serde_json::Value;

use crate::domain::record::Record;
use crate::io::IoError;
use crate::io::format::record_from_value;

pub fn read_json<R: Read>(reader: R) -> Result<Vec<Record>, IoError> {
    let value: Value = serde_json::from_reader(reader)?;
    let documents = match value {
        Value::Array(items) => items,
        single => vec![single],
    };
    documents
        .into_iter()
        .enumerate()
        .map(|(index, document)| record_from_value(index, document))
        .collect()
}

pub fn write_json<W: Write>(writer: W, records: &[Record]) -> Result<(), IoError> {
    if records.len() == 1 {
        serde_json::to_writer(writer, &records[0])?;
    } else {
        serde_json::to_writer(writer, records)?;
    }
    Ok(())
}
