use thiserror::Error;

use crate::io::{Format, IoError};

/// Errors produced when loading a check profile.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// Profile format could not be resolved from the file extension.
    #[error("unable to resolve profile format from `{path}`: {source}")]
    ResolveFormat {
        path: String,
        #[source]
        source: IoError,
    },

    /// Profile file could not be opened.
    #[error("failed to open profile file `{path}`: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Profile document did not match the profile schema.
    #[error("invalid profile schema: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },

    /// Profile document did not match the profile schema.
    #[error("invalid profile schema: {source}")]
    InvalidYaml {
        #[source]
        source: serde_yaml::Error,
    },

    /// Profiles are single documents; record-only formats are not accepted.
    #[error("profiles must be json or yaml, got {format}")]
    UnsupportedFormat { format: Format },

    /// The `required` list names a field without a rule.
    #[error("required field `{field}` has no rule in `fields`")]
    UnknownRequiredField { field: String },
}

/// Errors produced by the `normalize` command boundary.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// Input could not be parsed in the declared format.
    #[error("failed to read {format} input: {source}")]
    ReadInput {
        format: Format,
        #[source]
        source: IoError,
    },

    /// Output could not be serialized in the declared format.
    #[error("failed to write {format} output: {source}")]
    WriteOutput {
        format: Format,
        #[source]
        source: IoError,
    },

    /// Check profile could not be loaded.
    #[error(transparent)]
    Profile(#[from] ProfileError),

    /// A profiled field failed validation; nothing is written.
    #[error("invalid value at {path}: {message}")]
    InvalidValue {
        path: String,
        reason: String,
        message: String,
    },
}
