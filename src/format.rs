//! Numeral text and display formatting.
//!
//! Two renderings exist for every number. [`numeral_text`] is the editable
//! form kept in the entry buffer and used inside expression labels; it must
//! parse back to the same value. [`format_number`] is the display form with
//! thousands grouping and an exponential fallback for extreme magnitudes.

use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};

/// Magnitudes above this are shown in exponential notation.
const EXPONENTIAL_ABOVE: f64 = 999_999_999.0;
/// Non-zero magnitudes below this are shown in exponential notation.
const EXPONENTIAL_BELOW: f64 = 0.000_001;
/// Numeral text switches to exponent form at or above this magnitude.
const NUMERAL_EXPONENT_AT: f64 = 1e21;
/// Mantissa digits in exponential display.
const EXPONENTIAL_DIGITS: usize = 6;
/// Maximum fraction digits in grouped display.
const MAX_FRACTION_DIGITS: usize = 8;

/// Shortest round-trip text for `value`.
///
/// Integers carry no fraction and negative zero prints as `0`. Magnitudes of
/// at least `1e21` or below `1e-6` use exponent form (`1e+300`, `1.5e-7`).
/// Infinities print as `Infinity` / `-Infinity`. All of these parse back
/// through `f64::from_str`.
pub fn numeral_text(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else if value.abs() >= NUMERAL_EXPONENT_AT || value.abs() < EXPONENTIAL_BELOW {
        signed_exponent(format!("{value:e}"))
    } else {
        value.to_string()
    }
}

/// Display form of `value`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "0".to_string();
    }
    if value.is_infinite() {
        return numeral_text(value);
    }

    let abs = value.abs();
    if abs > EXPONENTIAL_ABOVE || (abs < EXPONENTIAL_BELOW && value != 0.0) {
        exponential(value)
    } else {
        grouped(value)
    }
}

/// Display form of a numeral text; unparsable text shows as `0`.
pub fn format_text(text: &str) -> String {
    text.parse::<f64>()
        .map(format_number)
        .unwrap_or_else(|_| "0".to_string())
}

/// `HH:MM` wall-clock time of `timestamp` in `tz`.
pub fn format_time<Tz>(timestamp: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    timestamp.with_timezone(tz).format("%H:%M").to_string()
}

fn exponential(value: f64) -> String {
    signed_exponent(format!("{:.*e}", EXPONENTIAL_DIGITS, value))
}

/// Writes an explicit `+` on non-negative exponents.
fn signed_exponent(text: String) -> String {
    if let Some((mantissa, exp)) = text.split_once('e') {
        if !exp.starts_with('-') {
            return format!("{mantissa}e+{exp}");
        }
    }
    text
}

fn grouped(value: f64) -> String {
    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        out.push('-');
    }

    let len = int_part.len();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}
