//! Request types for the compliance notification engine API.
//!
//! This module defines the JSON request structure for the `/evaluate`
//! endpoint.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Request body for the `/evaluate` endpoint.
///
/// All fields are optional; an empty object `{}` evaluates today's date and
/// delivers to the configured webhook.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvaluateRequest {
    /// The date to evaluate against. Accepts a plain `YYYY-MM-DD` date or an
    /// RFC 3339 timestamp, which is truncated to its UTC day to match the
    /// engine's whole-day semantics. Defaults to today (UTC).
    #[serde(default, deserialize_with = "deserialize_reference_date")]
    pub reference_date: Option<NaiveDate>,
    /// When true, the evaluation result is returned without delivering the
    /// payload to the webhook.
    #[serde(default)]
    pub dry_run: bool,
}

/// Parses a reference date from its textual form.
///
/// Plain dates are used as-is; timestamps are truncated to their UTC day
/// boundary before any day arithmetic happens.
fn parse_reference_date(raw: &str) -> Result<NaiveDate, String> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Ok(timestamp.with_timezone(&Utc).date_naive());
    }
    Err(format!(
        "invalid reference_date '{}': expected YYYY-MM-DD or an RFC 3339 timestamp",
        raw
    ))
}

fn deserialize_reference_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(value) => parse_reference_date(&value)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_empty_object_deserializes_to_defaults() {
        let request: EvaluateRequest = serde_json::from_str("{}").unwrap();
        assert!(request.reference_date.is_none());
        assert!(!request.dry_run);
    }

    #[test]
    fn test_plain_date_is_accepted() {
        let request: EvaluateRequest =
            serde_json::from_str(r#"{"reference_date": "2024-03-17"}"#).unwrap();
        assert_eq!(request.reference_date, Some(make_date("2024-03-17")));
    }

    #[test]
    fn test_timestamp_truncates_to_its_utc_day() {
        let request: EvaluateRequest =
            serde_json::from_str(r#"{"reference_date": "2024-03-17T23:45:00Z"}"#).unwrap();
        assert_eq!(request.reference_date, Some(make_date("2024-03-17")));
    }

    #[test]
    fn test_offset_timestamp_converts_to_utc_before_truncating() {
        // 01:30 at +05:00 is still the previous day in UTC.
        let request: EvaluateRequest =
            serde_json::from_str(r#"{"reference_date": "2024-03-18T01:30:00+05:00"}"#).unwrap();
        assert_eq!(request.reference_date, Some(make_date("2024-03-17")));
    }

    #[test]
    fn test_null_reference_date_is_none() {
        let request: EvaluateRequest =
            serde_json::from_str(r#"{"reference_date": null}"#).unwrap();
        assert!(request.reference_date.is_none());
    }

    #[test]
    fn test_garbage_reference_date_is_rejected() {
        let result: Result<EvaluateRequest, _> =
            serde_json::from_str(r#"{"reference_date": "next tuesday"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_dry_run_flag() {
        let request: EvaluateRequest = serde_json::from_str(r#"{"dry_run": true}"#).unwrap();
        assert!(request.dry_run);
    }
}
