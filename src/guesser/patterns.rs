//! Value patterns used by the type classifier

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static DATE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

static DATETIME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}[T ]\d{2}:\d{2}(:\d{2}(\.\d+)?)?(Z|[+-]\d{2}:?\d{2})?$").unwrap()
});

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());

static URL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(https?|ftp|file)://[^\s/$.?#].[^\s]*$").unwrap());

static MARKUP_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</?[a-zA-Z][a-zA-Z0-9-]*(\s[^<>]*)?/?>").unwrap());

/// Check whether a value is a scalar (neither array nor object)
pub fn is_scalar(value: &Value) -> bool {
    !value.is_array() && !value.is_object()
}

/// Check whether a string is an ISO-8601 date or date-time
///
/// The shape is matched first, then the calendar values are validated so
/// that `2024-13-45` is rejected.
pub fn is_date_string(value: &str) -> bool {
    let value = value.trim();
    if DATE_REGEX.is_match(value) {
        return NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok();
    }
    if !DATETIME_REGEX.is_match(value) {
        return false;
    }

    DateTime::parse_from_rfc3339(value).is_ok()
        || ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"]
            .iter()
            .any(|fmt| NaiveDateTime::parse_from_str(value, fmt).is_ok())
        || ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%:z"]
            .iter()
            .any(|fmt| DateTime::parse_from_str(value, fmt).is_ok())
}

/// Check whether a string is an email address
pub fn is_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value.trim())
}

/// Check whether a string is an absolute URL
pub fn is_url(value: &str) -> bool {
    URL_REGEX.is_match(value.trim())
}

/// Check whether a string contains something that looks like a markup tag
pub fn contains_markup(value: &str) -> bool {
    MARKUP_REGEX.is_match(value)
}
