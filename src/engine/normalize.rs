use crate::domain::profile::CheckProfile;
use crate::domain::record::{Record, field_path};
use crate::engine::datetime::DatetimeParser;
use crate::engine::validate::{self, MSG_REQUIRED};
use crate::util::clock::Clock;

/// First field that failed validation while normalizing. The batch is
/// rejected whole: emitting a mix of normalized and raw values would be
/// indistinguishable from clean output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeViolation {
    pub path: String,
    pub reason: &'static str,
    pub message: String,
}

/// Rewrite every profiled field to its normalized form (phone reformatting,
/// state uppercasing, datetime canonicalization). Unprofiled fields and
/// empty optional fields pass through unchanged.
pub fn normalize_records<C: Clock>(
    records: Vec<Record>,
    profile: &CheckProfile,
    parser: &DatetimeParser<C>,
) -> Result<Vec<Record>, NormalizeViolation> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, mut record)| {
            for (field, rule) in &profile.fields {
                let value = record.get(field).cloned();
                let raw = value.as_deref().unwrap_or_default();
                if raw.is_empty() {
                    if profile.is_required(field) {
                        return Err(NormalizeViolation {
                            path: field_path(index, field),
                            reason: "missing_value",
                            message: rule
                                .message
                                .clone()
                                .unwrap_or_else(|| MSG_REQUIRED.to_string()),
                        });
                    }
                    continue;
                }
                let normalized = validate::convert_value(rule.kind, raw, parser).map_err(
                    |violation| NormalizeViolation {
                        path: field_path(index, field),
                        reason: violation.reason,
                        message: rule.message.clone().unwrap_or(violation.message),
                    },
                )?;
                record.insert(field.clone(), normalized);
            }
            Ok(record)
        })
        .collect()
}
