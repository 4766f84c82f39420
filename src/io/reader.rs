use std::io::Read;

use crate::domain::record::Record;
use crate::io::format::{csv, json, jsonl, yaml};
use crate::io::{Format, IoError};

pub fn read_records<R: Read>(reader: R, format: Format) -> Result<Vec<Record>, IoError> {
    match format {
        Format::Json => json::read_json(reader),
        Format::Yaml => yaml::read_yaml(reader),
        Format::Csv => csv::read_csv(reader),
        Format::Jsonl => jsonl::read_jsonl(reader),
    }
}
