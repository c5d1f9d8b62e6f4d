//! Permissive coercion of wire values
//!
//! aria2 encodes integers as decimal strings and booleans as the literals
//! `"true"`/`"false"`. Missing or malformed values coerce to zero/false so a
//! single bad field never prevents a task from being displayed.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Parse the leading integer of a string
///
/// Leading whitespace and a single sign are accepted, then as many decimal
/// digits as follow. No digits yields 0, negative values clamp to 0 and
/// overflow saturates.
///
/// # Examples
///
/// ```
/// use aria2_tasks::normalize::coerce::parse_leading_u64;
///
/// assert_eq!(parse_leading_u64("1048576"), 1_048_576);
/// assert_eq!(parse_leading_u64("  42 bytes"), 42);
/// assert_eq!(parse_leading_u64("-5"), 0);
/// assert_eq!(parse_leading_u64("n/a"), 0);
/// ```
#[must_use]
pub fn parse_leading_u64(s: &str) -> u64 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: u64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        value = value
            .saturating_mul(10)
            .saturating_add(u64::from(b - b'0'));
    }

    if negative { 0 } else { value }
}

/// Coerce an arbitrary JSON value to a non-negative integer
#[must_use]
pub fn value_to_u64(value: &Value) -> u64 {
    match value {
        Value::String(s) => parse_leading_u64(s),
        Value::Number(n) => n.as_u64().unwrap_or_else(|| match n.as_f64() {
            Some(f) if f.is_finite() && f > 0.0 => f as u64,
            _ => 0,
        }),
        _ => 0,
    }
}

/// Coerce an arbitrary JSON value to a boolean; only `true` and `"true"` are true
#[must_use]
pub fn value_to_bool(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => s == "true",
        _ => false,
    }
}

/// `deserialize_with` adapter for integer wire fields
pub fn lenient_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(value_to_u64).unwrap_or(0))
}

/// `deserialize_with` adapter for count/index wire fields
pub fn lenient_usize<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let value = lenient_u64(deserializer)?;
    Ok(usize::try_from(value).unwrap_or(usize::MAX))
}

/// `deserialize_with` adapter for boolean wire fields
pub fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(value_to_bool).unwrap_or(false))
}
