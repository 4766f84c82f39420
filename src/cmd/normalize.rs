use std::io::{Read, Write};
use std::path::Path;

use crate::domain::error::NormalizeError;
use crate::domain::profile::CheckProfile;
use crate::engine::datetime::DatetimeParser;
use crate::engine::normalize::normalize_records;
use crate::io::{Format, reader, writer};

/// Execute `normalize` from input stream to output stream.
///
/// This function is intentionally thin: it loads the profile, coordinates
/// I/O, and delegates the field rewriting to the engine layer.
pub fn run<R: Read, W: Write>(
    input: R,
    output: W,
    input_format: Format,
    output_format: Format,
    profile_path: &Path,
) -> Result<(), NormalizeError> {
    let profile = CheckProfile::from_path(profile_path)?;
    let records =
        reader::read_records(input, input_format).map_err(|source| NormalizeError::ReadInput {
            format: input_format,
            source,
        })?;
    let parser = DatetimeParser::new().now_aliases(profile.now_aliases.clone());
    let normalized = normalize_records(records, &profile, &parser).map_err(|violation| {
        NormalizeError::InvalidValue {
            path: violation.path,
            reason: violation.reason.to_string(),
            message: violation.message,
        }
    })?;
    writer::write_records(output, output_format, &normalized).map_err(|source| {
        NormalizeError::WriteOutput {
            format: output_format,
            source,
        }
    })
}
