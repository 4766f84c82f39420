use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Single field violation in check output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViolationEntry {
    pub path: String,
    pub field: String,
    pub reason: String,
    pub message: String,
    pub actual: Value,
}

/// Deterministic report produced by check validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckReport {
    pub matched: bool,
    pub violation_count: usize,
    pub violations: Vec<ViolationEntry>,
}
