pub mod us;

use crate::domain::profile::FieldKind;
use crate::engine::datetime::{DatetimeParser, format_system_datetime};
use crate::util::clock::Clock;

pub const MSG_REQUIRED: &str = "This field is required.";

/// A field value that failed its validator, with a stable reason slug and a
/// user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub reason: &'static str,
    pub message: String,
}

impl Violation {
    pub fn new(reason: &'static str, message: impl Into<String>) -> Self {
        Self {
            reason,
            message: message.into(),
        }
    }
}

/// Validate a single non-empty value for `kind`, returning its normalized
/// form. Datetime fields normalize to the canonical `YYYY-MM-DD HH:MM`
/// rendering through `parser`.
pub fn convert_value<C: Clock>(
    kind: FieldKind,
    value: &str,
    parser: &DatetimeParser<C>,
) -> Result<String, Violation> {
    match kind {
        FieldKind::UsZip => us::convert_zip_code(value),
        FieldKind::UsPhone => us::convert_phone_number(value),
        FieldKind::UsState => us::convert_state_code(value),
        FieldKind::Datetime => {
            let parsed = parser
                .parse(Some(value))
                .map_err(|err| Violation::new("invalid_format", err.to_string()))?;
            Ok(format_system_datetime(&parsed))
        }
    }
}
