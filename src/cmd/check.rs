use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::profile::CheckProfile;
use crate::domain::record::Record;
use crate::domain::report::CheckReport;
use crate::engine::check::check_records;
use crate::engine::datetime::DatetimeParser;
use crate::io::{self, Format, IoError};

/// Input arguments for check command execution API.
#[derive(Debug, Clone)]
pub struct CheckCommandArgs {
    pub input: Option<PathBuf>,
    pub from: Option<Format>,
    pub profile: PathBuf,
}

/// Structured command response that carries exit-code mapping and JSON payload.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CheckCommandResponse {
    pub exit_code: i32,
    pub payload: Value,
}

pub fn run_with_stdin<R: Read>(args: &CheckCommandArgs, stdin: R) -> CheckCommandResponse {
    match execute(args, stdin) {
        Ok(report) => report_response(report),
        Err(CommandError::InputUsage(message)) => CheckCommandResponse {
            exit_code: 3,
            payload: json!({
                "error": "input_usage_error",
                "message": message,
            }),
        },
        Err(CommandError::Internal(message)) => CheckCommandResponse {
            exit_code: 1,
            payload: json!({
                "error": "internal_error",
                "message": message,
            }),
        },
    }
}

fn report_response(report: CheckReport) -> CheckCommandResponse {
    let exit_code = if report.matched { 0 } else { 2 };
    match serde_json::to_value(&report) {
        Ok(payload) => CheckCommandResponse { exit_code, payload },
        Err(_) => CheckCommandResponse {
            exit_code: 1,
            payload: json!({
                "error": "internal_error",
                "message": "failed to serialize check report"
            }),
        },
    }
}

fn execute<R: Read>(args: &CheckCommandArgs, stdin: R) -> Result<CheckReport, CommandError> {
    let profile = CheckProfile::from_path(&args.profile)
        .map_err(|err| CommandError::InputUsage(err.to_string()))?;
    let input_format =
        io::resolve_input_format(args.from, args.input.as_deref()).map_err(map_io_as_input_usage)?;
    let records = load_records(args, stdin, input_format)?;
    let parser = DatetimeParser::new().now_aliases(profile.now_aliases.clone());
    Ok(check_records(&records, &profile, &parser))
}

fn load_records<R: Read>(
    args: &CheckCommandArgs,
    stdin: R,
    format: Format,
) -> Result<Vec<Record>, CommandError> {
    if let Some(path) = &args.input {
        let file = File::open(path).map_err(|err| {
            CommandError::InputUsage(format!(
                "failed to open input file `{}`: {err}",
                path.display()
            ))
        })?;
        io::reader::read_records(file, format).map_err(map_io_as_input_usage)
    } else {
        io::reader::read_records(stdin, format).map_err(map_io_as_input_usage)
    }
}

fn map_io_as_input_usage(error: IoError) -> CommandError {
    CommandError::InputUsage(error.to_string())
}

enum CommandError {
    InputUsage(String),
    Internal(String),
}
