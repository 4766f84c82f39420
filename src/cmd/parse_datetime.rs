use chrono::{Datelike, Timelike};
use serde::Serialize;
use serde_json::{Value, json};

use crate::engine::datetime::{DatetimeParser, format_system_datetime};
use crate::util::clock::{Clock, SystemClock};

/// Input arguments for parse-datetime command execution API.
#[derive(Debug, Clone)]
pub struct ParseDatetimeCommandArgs {
    /// Value to parse; `None` resolves to the current time.
    pub value: Option<String>,
    pub rebase: bool,
    /// Extra localized spellings of `now`.
    pub now_aliases: Vec<String>,
}

/// Structured command response that carries exit-code mapping and JSON payload.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ParseDatetimeCommandResponse {
    pub exit_code: i32,
    pub payload: Value,
}

pub fn run(args: &ParseDatetimeCommandArgs) -> ParseDatetimeCommandResponse {
    run_with_clock(args, SystemClock)
}

pub fn run_with_clock<C: Clock>(
    args: &ParseDatetimeCommandArgs,
    clock: C,
) -> ParseDatetimeCommandResponse {
    let parser = DatetimeParser::with_clock(clock)
        .rebase(args.rebase)
        .now_aliases(args.now_aliases.iter().cloned());

    match parser.parse(args.value.as_deref()) {
        Ok(parsed) => ParseDatetimeCommandResponse {
            exit_code: 0,
            payload: json!({
                "input": args.value,
                "datetime": format_system_datetime(&parsed),
                "year": parsed.year(),
                "month": parsed.month(),
                "day": parsed.day(),
                "hour": parsed.hour(),
                "minute": parsed.minute(),
                "second": parsed.second(),
                "rebase": parser.is_rebasing(),
            }),
        },
        Err(error) => ParseDatetimeCommandResponse {
            exit_code: 2,
            payload: json!({
                "error": "invalid_format",
                "message": error.to_string(),
                "input": error.input,
            }),
        },
    }
}
