// API wire types module

use serde::Deserialize;
use serde_json::Value;

/// Request body for the threshold filter endpoint
///
/// The `threshold` field is kept as a raw JSON value so that a missing
/// field, a wrong type, and a non-finite number all funnel through the same
/// validation in `filter::parse_threshold`.
#[derive(Debug, Deserialize)]
pub struct ThresholdRequest {
    #[serde(default)]
    pub threshold: Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_threshold() {
        let req: ThresholdRequest = serde_json::from_str(r#"{"threshold": 300}"#).unwrap();
        assert_eq!(req.threshold, serde_json::json!(300));
    }

    #[test]
    fn test_missing_threshold_defaults_to_null() {
        let req: ThresholdRequest = serde_json::from_str("{}").unwrap();
        assert!(req.threshold.is_null());
    }

    #[test]
    fn test_string_threshold_kept_raw() {
        let req: ThresholdRequest = serde_json::from_str(r#"{"threshold": "abc"}"#).unwrap();
        assert_eq!(req.threshold, serde_json::json!("abc"));
    }
}
