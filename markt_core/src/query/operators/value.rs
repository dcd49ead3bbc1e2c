//! Typed comparison values and the parsers that produce them

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Largest number of fractional digits a fixed-point value can carry
pub const MAX_SCALE: u32 = 28;

/// A client value converted into the type its operator set compares with
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    Text(String),
    /// `units / 10^scale`, kept as an integer to avoid float rounding
    FixedPoint { units: i64, scale: u32 },
    DateTime(DateTime<FixedOffset>),
}

impl TypedValue {
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            TypedValue::FixedPoint { units, scale } => Some(Decimal::new(*units, *scale)),
            _ => None,
        }
    }
}

/// Parses decimal input into a scaled integer.
///
/// The scale is the input's own number of fractional digits, raised to at
/// least `min_scale`: `"12.50"` becomes 1250 and `"3"` becomes 300 with a
/// minimum of 2.
pub fn parse_fixed_point(input: &str, min_scale: u32) -> Option<TypedValue> {
    let input = input.trim();
    if !input
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+'))
    {
        return None;
    }
    let mut decimal = Decimal::from_str(input).ok()?;
    let scale = decimal.scale().max(min_scale.min(MAX_SCALE));
    decimal.rescale(scale);
    if decimal.scale() != scale {
        // Too many significant digits to widen without losing precision
        return None;
    }
    let units = i64::try_from(decimal.mantissa()).ok()?;
    Some(TypedValue::FixedPoint { units, scale })
}

/// Parses a timestamp with offset.
///
/// Accepts RFC 3339 and RFC 2822. Date-only (`YYYY-MM-DD`) and offset-less
/// (`YYYY-MM-DDTHH:MM:SS`) input is read as UTC.
pub fn parse_datetime(input: &str) -> Option<DateTime<FixedOffset>> {
    let input = input.trim();

    if let Ok(datetime) = DateTime::parse_from_rfc3339(input) {
        return Some(datetime);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc2822(input) {
        return Some(datetime);
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Some(naive.and_utc().fixed_offset());
        }
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().fixed_offset())
}
