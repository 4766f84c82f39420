use std::io::{BufRead, BufReader, Read, Write};

use serde_json::Value;

use crate::domain::record::Record;
use crate::io::IoError;
use crate::io::format::record_from_value;

pub fn read_jsonl<R: Read>(reader: R) -> Result<Vec<Record>, IoError> {
    let mut records = Vec::new();
    let reader = BufReader::new(reader);
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let value: Value = serde_json::from_str(trimmed)?;
        records.push(record_from_value(records.len(), value)?);
    }
    Ok(records)
}

pub fn write_jsonl<W: Write>(mut writer: W, records: &[Record]) -> Result<(), IoError> {
    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}
