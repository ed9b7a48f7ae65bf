//! # Request Value Coercion
//!
//! Request parameters arrive as loosely typed text or JSON. This module turns
//! them into the integer and date values the domain stores.
//!
//! Integer coercion is total: every input yields a number, and input without
//! a leading numeric part becomes `0`. Date parsing is not: a value that is
//! present but unreadable is reported as [`ClinicError::MalformedInput`].

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::errors::{ClinicError, ClinicResult};
use crate::models::slot::DAY_FORMAT;

/// Coerces text to an integer using its leading numeric prefix.
///
/// # Example
///
/// ```
/// use slotbook_core::coerce::to_int;
///
/// assert_eq!(to_int("42"), 42);
/// assert_eq!(to_int("12abc"), 12);
/// assert_eq!(to_int("abc"), 0);
/// ```
pub fn to_int(raw: &str) -> i64 {
    let trimmed = raw.trim_start_matches([' ', '\t', '\n', '\r', '\x0b', '\x0c']);
    let prefix = numeric_prefix(trimmed);

    if prefix.is_empty() {
        return 0;
    }

    if prefix.contains(['.', 'e', 'E']) {
        return prefix.parse::<f64>().map(float_to_int).unwrap_or(0);
    }

    prefix.parse::<i64>().unwrap_or_else(|_| {
        if prefix.starts_with('-') {
            i64::MIN
        } else {
            i64::MAX
        }
    })
}

/// Coerces any JSON value to an integer.
pub fn value_to_int(value: &Value) -> i64 {
    match value {
        Value::Null => 0,
        Value::Bool(b) => i64::from(*b),
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(float_to_int))
            .unwrap_or(0),
        Value::String(s) => to_int(s),
        Value::Array(items) => i64::from(!items.is_empty()),
        Value::Object(_) => 1,
    }
}

/// Renders a scalar JSON value as text. `null` stays absent.
pub fn value_to_text(value: &Value) -> ClinicResult<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::Bool(true) => Ok(Some("1".to_string())),
        Value::Bool(false) => Ok(Some(String::new())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Array(_) | Value::Object(_) => Err(ClinicError::MalformedInput(format!(
            "expected a scalar value, got {}",
            value
        ))),
    }
}

/// Parses a slot day.
///
/// An absent or blank value means `today`. Timestamps are accepted and
/// their time-of-day is dropped.
pub fn parse_day(raw: Option<&str>, today: NaiveDate) -> ClinicResult<NaiveDate> {
    let value = raw.map(str::trim).unwrap_or_default();

    match value.to_ascii_lowercase().as_str() {
        "" | "now" | "today" => return Ok(today),
        "tomorrow" => return Ok(today + Duration::days(1)),
        "yesterday" => return Ok(today - Duration::days(1)),
        _ => {}
    }

    if let Ok(day) = NaiveDate::parse_from_str(value, DAY_FORMAT) {
        return Ok(day);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.date_naive());
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(timestamp.date());
        }
    }

    Err(ClinicError::MalformedInput(format!(
        "cannot parse '{}' as a calendar date",
        value
    )))
}

fn float_to_int(f: f64) -> i64 {
    if f.is_finite() { f as i64 } else { 0 }
}

/// Longest prefix shaped like `[+-]digits[.digits][e[+-]digits]`.
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        // "5." is numeric, a lone "." is not
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return "";
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    &s[..end]
}
