//! Scalar coercions shared by the decoder and the normalizer.

use std::sync::OnceLock;

use chrono::{NaiveDateTime, Timelike};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::value::NativeValue;

/// Parse pattern for recoverable timestamps, `YYYY-MM-DDThh:mm:ss.ffffff`.
///
/// chrono's parser is lenient about padding, signs and a missing fraction,
/// so [`parse_timestamp`] checks the shape of the input before parsing.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Render pattern for timestamps, always six fractional digits.
pub const TIMESTAMP_DISPLAY_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

fn timestamp_regex() -> &'static regex::Regex {
    static RE: OnceLock<regex::Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex::Regex::new(
            r"^[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}T[0-9]{1,2}:[0-9]{1,2}:[0-9]{1,2}\.[0-9]{1,6}$",
        )
        .unwrap()
    })
}

fn number_regex() -> &'static regex::Regex {
    static RE: OnceLock<regex::Regex> = OnceLock::new();
    RE.get_or_init(|| regex::Regex::new(r"^-?[0-9]+(\.[0-9]+)?$").unwrap())
}

/// Parses `s` as a timestamp with microsecond precision and no offset.
///
/// Only ASCII digits are accepted, the year has exactly four of them and the
/// fraction must be present with 1 to 6 digits. Leap seconds are rejected.
/// Anything else yields `None`; callers keep the original string.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    if !timestamp_regex().is_match(s) {
        return None;
    }
    let ts = NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).ok()?;
    // chrono encodes second 60 as an overflowing nanosecond count
    if ts.nanosecond() >= 1_000_000_000 {
        return None;
    }
    Some(ts)
}

/// Coerces a decimal to `Int` when its fractional part is zero, else `Float`.
///
/// Whole values outside the `i64` range become `Float`.
pub fn decimal_to_native(value: &Decimal) -> NativeValue {
    if value.fract().is_zero() {
        if let Some(i) = value.to_i64() {
            return NativeValue::Int(i);
        }
    }
    NativeValue::Float(value.to_f64().unwrap_or(0.0))
}

/// Converts the string payload of an `N` attribute.
///
/// `-?digits.digits` gives `Float` and `-?digits` gives `Int` (or `Float`
/// past the `i64` range). Strings outside that grammar are still read as an
/// integer or float when Rust can parse them (`"1E+3"`, `" 7"`); otherwise the
/// string is returned unchanged.
pub fn parse_number(s: &str) -> NativeValue {
    if let Some(caps) = number_regex().captures(s) {
        if caps.get(1).is_some() {
            if let Ok(f) = s.parse::<f64>() {
                return NativeValue::Float(f);
            }
        } else if let Ok(i) = s.parse::<i64>() {
            return NativeValue::Int(i);
        } else if let Ok(f) = s.parse::<f64>() {
            return NativeValue::Float(f);
        }
    }
    let trimmed = s.trim();
    if let Ok(i) = trimmed.parse::<i64>() {
        return NativeValue::Int(i);
    }
    match trimmed.parse::<f64>() {
        Ok(f) if f.is_finite() => NativeValue::Float(f),
        _ => NativeValue::String(s.to_string()),
    }
}
