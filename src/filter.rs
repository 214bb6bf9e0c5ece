//! Threshold filtering module
//!
//! The one computational operation of the service: validate a numeric
//! threshold and return the students whose total marks strictly exceed it,
//! projected to `{name, total}` in roster order.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::roster::StudentRecord;

/// Fixed message returned for every threshold validation failure
pub const INVALID_THRESHOLD: &str = "Invalid threshold value. Please provide a valid number.";

/// Threshold validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdError;

impl fmt::Display for ThresholdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(INVALID_THRESHOLD)
    }
}

impl std::error::Error for ThresholdError {}

/// Projection of a student record to the reporting fields
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct StudentSummary {
    pub name: String,
    pub total: u32,
}

/// Result of a threshold filter pass
#[derive(Debug, Serialize)]
pub struct FilteredStudents {
    pub count: usize,
    pub students: Vec<StudentSummary>,
}

/// Validate the raw `threshold` field of a request body.
///
/// Accepts any finite JSON number. Everything else is rejected: a missing
/// field (null), strings, booleans, arrays, and the infinities serde_json
/// can produce from overflowing float literals.
pub fn parse_threshold(raw: &Value) -> Result<f64, ThresholdError> {
    match raw.as_f64() {
        Some(t) if t.is_finite() => Ok(t),
        _ => Err(ThresholdError),
    }
}

/// Keep students whose total strictly exceeds `threshold`.
///
/// Single pass, order-preserving; `count` always equals the list length.
pub fn above_threshold(records: &[StudentRecord], threshold: f64) -> FilteredStudents {
    let students: Vec<StudentSummary> = records
        .iter()
        .filter(|s| f64::from(s.total()) > threshold)
        .map(|s| StudentSummary {
            name: s.name.clone(),
            total: s.total(),
        })
        .collect();

    FilteredStudents {
        count: students.len(),
        students,
    }
}
