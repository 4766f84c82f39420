use serde_json::Value;

use crate::domain::profile::CheckProfile;
use crate::domain::record::{Record, field_path};
use crate::domain::report::{CheckReport, ViolationEntry};
use crate::engine::datetime::DatetimeParser;
use crate::engine::validate::{self, MSG_REQUIRED};
use crate::util::clock::Clock;

/// Validate every profiled field of every record, producing a deterministic
/// report. Fields without a rule pass through unchecked; profiled fields
/// that are missing or empty only fail when listed as required.
pub fn check_records<C: Clock>(
    records: &[Record],
    profile: &CheckProfile,
    parser: &DatetimeParser<C>,
) -> CheckReport {
    let mut violations = Vec::new();

    for (index, record) in records.iter().enumerate() {
        for (field, rule) in &profile.fields {
            let value = record.get(field);
            let raw = value.map(String::as_str).unwrap_or_default();
            if raw.is_empty() {
                if profile.is_required(field) {
                    violations.push(ViolationEntry {
                        path: field_path(index, field),
                        field: field.clone(),
                        reason: "missing_value".to_string(),
                        message: rule
                            .message
                            .clone()
                            .unwrap_or_else(|| MSG_REQUIRED.to_string()),
                        actual: value
                            .map(|text| Value::String(text.clone()))
                            .unwrap_or(Value::Null),
                    });
                }
                continue;
            }
            if let Err(violation) = validate::convert_value(rule.kind, raw, parser) {
                violations.push(ViolationEntry {
                    path: field_path(index, field),
                    field: field.clone(),
                    reason: violation.reason.to_string(),
                    message: rule.message.clone().unwrap_or(violation.message),
                    actual: Value::String(raw.to_string()),
                });
            }
        }
    }

    sort_violations(&mut violations);

    CheckReport {
        matched: violations.is_empty(),
        violation_count: violations.len(),
        violations,
    }
}

fn sort_violations(violations: &mut [ViolationEntry]) {
    violations.sort_by(|left, right| {
        (left.path.as_str(), left.reason.as_str())
            .cmp(&(right.path.as_str(), right.reason.as_str()))
    });
}
