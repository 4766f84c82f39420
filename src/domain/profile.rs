use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::error::ProfileError;
use crate::io::{self, Format};

/// Check profile schema: which record fields are validated, how, and which
/// are mandatory.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CheckProfile {
    #[serde(default)]
    pub fields: BTreeMap<String, FieldRule>,
    #[serde(default)]
    pub required: Vec<String>,
    /// Extra localized spellings of `now` accepted by datetime fields.
    #[serde(default)]
    pub now_aliases: Vec<String>,
}

/// Validation rule for a single field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FieldRule {
    pub kind: FieldKind,
    /// Replaces the default violation message for this field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Supported field validators.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    UsZip,
    UsPhone,
    UsState,
    Datetime,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UsZip => "us_zip",
            Self::UsPhone => "us_phone",
            Self::UsState => "us_state",
            Self::Datetime => "datetime",
        }
    }
}

impl CheckProfile {
    /// Load a profile from a JSON or YAML file, resolving the format from
    /// the file extension.
    pub fn from_path(path: &Path) -> Result<Self, ProfileError> {
        let format = io::resolve_input_format(None, Some(path)).map_err(|source| {
            ProfileError::ResolveFormat {
                path: path.display().to_string(),
                source,
            }
        })?;
        let file = File::open(path).map_err(|source| ProfileError::Open {
            path: path.display().to_string(),
            source,
        })?;
        let profile: Self = match format {
            Format::Json => serde_json::from_reader(file)
                .map_err(|source| ProfileError::InvalidJson { source })?,
            Format::Yaml => serde_yaml::from_reader(file)
                .map_err(|source| ProfileError::InvalidYaml { source })?,
            other => {
                return Err(ProfileError::UnsupportedFormat { format: other });
            }
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Reject profiles whose `required` list names fields without a rule.
    pub fn validate(&self) -> Result<(), ProfileError> {
        for field in &self.required {
            if !self.fields.contains_key(field) {
                return Err(ProfileError::UnknownRequiredField {
                    field: field.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn is_required(&self, field: &str) -> bool {
        self.required.iter().any(|name| name == field)
    }
}
