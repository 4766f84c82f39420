use std::collections::BTreeSet;
use std::io::{Read, Write};

use crate::domain::record::Record;
use crate::io::IoError;

pub fn read_csv<R: Read>(reader: R) -> Result<Vec<Record>, IoError> {
    let mut csv_reader = csv::ReaderBuilder::new().from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut out = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        let mut record = Record::new();
        for (index, cell) in row.iter().enumerate() {
            let field = headers
                .get(index)
                .map(ToOwned::to_owned)
                .unwrap_or_else(|| format!("col_{index}"));
            record.insert(field, cell.to_string());
        }
        out.push(record);
    }
    Ok(out)
}

/// Headers are the sorted union of all record fields; records missing a
/// field write an empty cell.
pub fn write_csv<W: Write>(writer: W, records: &[Record]) -> Result<(), IoError> {
    let mut headers = BTreeSet::new();
    for record in records {
        headers.extend(record.keys().cloned());
    }
    let headers: Vec<String> = headers.into_iter().collect();
    let mut csv_writer = csv::WriterBuilder::new().from_writer(writer);
    if !headers.is_empty() {
        csv_writer.write_record(&headers)?;
    }
    for record in records {
        let row: Vec<&str> = headers
            .iter()
            .map(|field| record.get(field).map(String::as_str).unwrap_or_default())
            .collect();
        csv_writer.write_record(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}
