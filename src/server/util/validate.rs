//! Field checks shared by request parameter conversions.
//!
//! Request DTOs keep loosely typed fields as raw JSON values. These helpers turn
//! them into typed values, returning `None` or an error kind instead of failing
//! deserialization, so callers can collect one message per bad field.

use std::ops::RangeInclusive;

use serde_json::Value;

/// Why a text field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextError {
    /// Missing, null or an empty string
    Empty,
    /// Present but not a JSON string
    NotAString,
}

/// Extracts a non-empty string from an optional JSON value.
///
/// # Returns
/// - `Ok(&str)` - Value is a non-empty string
/// - `Err(TextError::Empty)` - Value is absent, null or `""`
/// - `Err(TextError::NotAString)` - Value is a number, bool, array or object
pub fn non_empty_text(value: Option<&Value>) -> Result<&str, TextError> {
    match value {
        None | Some(Value::Null) => Err(TextError::Empty),
        Some(Value::String(text)) if text.is_empty() => Err(TextError::Empty),
        Some(Value::String(text)) => Ok(text.as_str()),
        Some(_) => Err(TextError::NotAString),
    }
}

/// Returns the value as an integer when it is a JSON integer.
///
/// Floats, numeric strings and booleans are not integers.
pub fn integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64(),
        _ => None,
    }
}

/// Returns the value as an `i32` when it is a JSON integer inside `range`.
pub fn integer_in_range(value: &Value, range: RangeInclusive<i64>) -> Option<i32> {
    integer(value)
        .filter(|n| range.contains(n))
        .and_then(|n| i32::try_from(n).ok())
}

/// Returns the value as a row ID when it is a JSON integer that fits in `i32`.
pub fn id(value: Option<&Value>) -> Option<i32> {
    value
        .and_then(integer)
        .and_then(|n| i32::try_from(n).ok())
}
