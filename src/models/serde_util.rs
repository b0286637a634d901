//! Lenient field deserializers for the price feed.
//!
//! The feed is a public government endpoint and individual records are not
//! always complete: names come back as `null`, prices as strings, dates as
//! empty strings. Every helper here accepts any JSON value and falls back to
//! a neutral default, so a bad field never rejects the record it belongs to.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Any string-like value; numbers are stringified, everything else is empty.
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

/// Non-empty strings only.
pub fn optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = string(deserializer)?;
    Ok(if s.trim().is_empty() { None } else { Some(s) })
}

/// Non-negative finite amount; numeric strings are accepted, anything else is zero.
pub fn amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };

    Ok(if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    })
}

/// Signed amount, used for values the API reports as changes.
pub fn signed_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };

    Ok(if value.is_finite() { value } else { 0.0 })
}

/// Integer identifier; numeric strings are accepted, anything else is zero.
pub fn id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64().unwrap_or(0),
        Value::String(s) => s.trim().parse::<i64>().unwrap_or(0),
        _ => 0,
    })
}

/// Positive identifier, or `None` when the field is missing, zero or garbage.
pub fn optional_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Some(id(deserializer)?).filter(|id| *id > 0))
}

/// ISO calendar date (`YYYY-MM-DD`), tolerating a trailing time component.
pub fn date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => parse_date(&s),
        _ => None,
    })
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    let day = s.trim().get(..10)?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_variants() {
        let expected = NaiveDate::from_ymd_opt(2025, 7, 25);
        assert_eq!(parse_date("2025-07-25"), expected);
        assert_eq!(parse_date("2025-07-25 08:00:00"), expected);
        assert_eq!(parse_date("2025-07-25T08:00:00Z"), expected);
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("25/07/2025"), None);
    }
}
