use std::io::Write;

use crate::domain::record::Record;
use crate::io::format::{csv, json, jsonl, yaml};
use crate::io::{Format, IoError};

pub fn write_records<W: Write>(
    writer: W,
    format: Format,
    records: &[Record],
) -> Result<(), IoError> {
    match format {
        Format::Json => json::write_json(writer, records),
        Format::Yaml => yaml::write_yaml(writer, records),
        Format::Csv => csv::write_csv(writer, records),
        Format::Jsonl => jsonl::write_jsonl(writer, records),
    }
}
