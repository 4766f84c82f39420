use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand, ValueEnum};
use formq::cmd::{check, normalize, parse_datetime};
use formq::domain::error::NormalizeError;
use formq::io::{Format, IoError};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Debug, Parser)]
#[command(
    name = "formq",
    version,
    about = "Deterministic form-field localization and validation CLI"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate form-field records against a check profile.
    Check(CheckArgs),
    /// Rewrite records with every profiled field normalized.
    Normalize(NormalizeArgs),
    /// Parse a lenient date/time string into a UTC-naive timestamp.
    ParseDatetime(ParseDatetimeArgs),
}

#[derive(Debug, clap::Args)]
struct CheckArgs {
    #[arg(long)]
    profile: PathBuf,

    #[arg(long)]
    input: Option<PathBuf>,

    #[arg(long, value_enum)]
    from: Option<CliFormat>,
}

#[derive(Debug, clap::Args)]
struct NormalizeArgs {
    #[arg(long)]
    profile: PathBuf,

    #[arg(long)]
    input: Option<PathBuf>,

    #[arg(long, value_enum)]
    from: Option<CliFormat>,

    #[arg(long, value_enum)]
    to: Option<CliFormat>,
}

#[derive(Debug, clap::Args)]
struct ParseDatetimeArgs {
    /// Value to parse; omit for the current time.
    value: Option<String>,

    #[arg(long, action = clap::ArgAction::Set, default_value_t = true)]
    rebase: bool,

    /// Extra localized spelling of "now" (repeatable).
    #[arg(long = "now-alias")]
    now_aliases: Vec<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliFormat {
    Json,
    Yaml,
    Csv,
    Jsonl,
}

impl From<CliFormat> for Format {
    fn from(value: CliFormat) -> Self {
        match value {
            CliFormat::Json => Self::Json,
            CliFormat::Yaml => Self::Yaml,
            CliFormat::Csv => Self::Csv,
            CliFormat::Jsonl => Self::Jsonl,
        }
    }
}

#[derive(Serialize)]
struct CliError<'a> {
    error: &'a str,
    message: String,
    code: i32,
    details: Value,
}

fn main() {
    process::exit(run());
}

fn run() -> i32 {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => return handle_parse_error(error),
    };

    match cli.command {
        Commands::Check(args) => run_check(args),
        Commands::Normalize(args) => run_normalize(args),
        Commands::ParseDatetime(args) => run_parse_datetime(args),
    }
}

fn handle_parse_error(error: clap::Error) -> i32 {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            print!("{error}");
            0
        }
        _ => {
            emit_error(
                "input_usage_error",
                error.to_string(),
                json!({"kind": "cli_parse_error"}),
                3,
            );
            3
        }
    }
}

fn run_check(args: CheckArgs) -> i32 {
    let command_args = check::CheckCommandArgs {
        input: args.input,
        from: args.from.map(Into::into),
        profile: args.profile,
    };

    let stdin = io::stdin();
    let response = check::run_with_stdin(&command_args, stdin.lock());

    match response.exit_code {
        0 | 2 => {
            if emit_json_stdout(&response.payload) {
                response.exit_code
            } else {
                emit_error(
                    "internal_error",
                    "failed to serialize check response".to_string(),
                    json!({"command": "check"}),
                    1,
                );
                1
            }
        }
        3 | 1 => {
            if emit_json_stderr(&response.payload) {
                response.exit_code
            } else {
                emit_error(
                    "internal_error",
                    "failed to serialize check error".to_string(),
                    json!({"command": "check"}),
                    1,
                );
                1
            }
        }
        other => {
            emit_error(
                "internal_error",
                format!("unexpected check exit code: {other}"),
                json!({"command": "check"}),
                1,
            );
            1
        }
    }
}

fn run_normalize(args: NormalizeArgs) -> i32 {
    let input_format =
        match formq::io::resolve_input_format(args.from.map(Into::into), args.input.as_deref()) {
            Ok(format) => format,
            Err(error) => {
                emit_error(
                    "input_usage_error",
                    error.to_string(),
                    json!({"command": "normalize"}),
                    3,
                );
                return 3;
            }
        };
    let output_format = args.to.map(Into::into).unwrap_or(Format::Json);

    let stdout = io::stdout();
    let mut output = stdout.lock();
    if let Some(path) = args.input {
        match File::open(&path) {
            Ok(file) => match normalize::run(
                file,
                &mut output,
                input_format,
                output_format,
                &args.profile,
            ) {
                Ok(()) => 0,
                Err(error) => emit_normalize_error(&error),
            },
            Err(err) => {
                emit_error(
                    "input_usage_error",
                    format!("failed to open input file `{}`: {err}", path.display()),
                    json!({"command": "normalize", "input": path}),
                    3,
                );
                3
            }
        }
    } else {
        let stdin = io::stdin();
        match normalize::run(
            stdin.lock(),
            &mut output,
            input_format,
            output_format,
            &args.profile,
        ) {
            Ok(()) => 0,
            Err(error) => emit_normalize_error(&error),
        }
    }
}

fn run_parse_datetime(args: ParseDatetimeArgs) -> i32 {
    let command_args = parse_datetime::ParseDatetimeCommandArgs {
        value: args.value,
        rebase: args.rebase,
        now_aliases: args.now_aliases,
    };
    let response = parse_datetime::run(&command_args);

    if emit_json_stdout(&response.payload) {
        response.exit_code
    } else {
        emit_error(
            "internal_error",
            "failed to serialize parse-datetime response".to_string(),
            json!({"command": "parse-datetime"}),
            1,
        );
        1
    }
}

fn emit_normalize_error(error: &NormalizeError) -> i32 {
    let (exit_code, error_kind) = map_normalize_error(error);
    emit_error(
        error_kind,
        error.to_string(),
        json!({"command": "normalize"}),
        exit_code,
    );
    exit_code
}

fn map_normalize_error(error: &NormalizeError) -> (i32, &'static str) {
    match error {
        NormalizeError::ReadInput { .. } | NormalizeError::Profile(_) => (3, "input_usage_error"),
        NormalizeError::WriteOutput { source, .. } => match source {
            IoError::Io(_) => (1, "internal_error"),
            _ => (3, "input_usage_error"),
        },
        NormalizeError::InvalidValue { .. } => (2, "validation_error"),
    }
}

fn emit_json_stdout(value: &Value) -> bool {
    match serde_json::to_string(value) {
        Ok(serialized) => {
            println!("{serialized}");
            true
        }
        Err(_) => false,
    }
}

fn emit_json_stderr(value: &Value) -> bool {
    match serde_json::to_string(value) {
        Ok(serialized) => {
            eprintln!("{serialized}");
            true
        }
        Err(_) => false,
    }
}

fn emit_error(error: &'static str, message: String, details: Value, code: i32) {
    let payload = CliError {
        error,
        message,
        code,
        details,
    };
    match serde_json::to_string(&payload) {
        Ok(serialized) => eprintln!("{serialized}"),
        Err(_) => eprintln!(
            "{{\"error\":\"internal_error\",\"message\":\"failed to serialize error\",\"code\":1}}"
        ),
    }
}
