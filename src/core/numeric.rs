//! Lenient numeric coercion.
//!
//! Every figure typed by the user (hours, prices, years) goes through
//! [`to_number`]. Empty, missing or garbage input is read as `0.0`; the
//! function never fails.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Convert free-form text into a finite float (`0.0` when not a number).
///
/// Only the leading number is read, so `"10h"` is `10.0` and
/// `"12.5 hrs"` is `12.5`.
pub fn to_number(raw: &str) -> f64 {
    let prefix = leading_number(raw.trim());
    if prefix.is_empty() {
        return 0.0;
    }

    match prefix.parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => 0.0,
    }
}

/// Longest prefix of `s` that forms a decimal float literal:
/// `[+-]digits[.digits][(e|E)[+-]digits]`, with at least one digit in the
/// mantissa. Empty when there is none.
fn leading_number(s: &str) -> &str {
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        end = frac_end;
    }

    if mantissa_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        // a bare `e` is not part of the number
        if exp_end > exp {
            end = exp_end;
        }
    }

    &s[..end]
}

/// Same as [`to_number`] for optional input (`None` → `0.0`).
pub fn coerce(raw: Option<&str>) -> f64 {
    raw.map(to_number).unwrap_or(0.0)
}

/// Coerce an arbitrary JSON value (number, numeric string, null, ...).
pub fn coerce_json(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()).unwrap_or(0.0),
        Value::String(s) => to_number(s),
        _ => 0.0,
    }
}

// ---------------------------
// Serde helpers for stored records
// ---------------------------

/// Accepts numbers, numeric strings, empty strings and null.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(coerce_json).unwrap_or(0.0))
}

/// Years are typed as text in the editing surface; truncated toward zero.
pub fn lenient_i32<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let n = lenient_f64(deserializer)?;
    Ok(n.trunc() as i32)
}

/// Strings may be missing or null in older stored data.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}

pub fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => b,
        Some(Value::String(s)) => matches!(s.trim().to_lowercase().as_str(), "true" | "yes" | "1"),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_plain_and_padded_numbers() {
        assert_eq!(to_number("12.5"), 12.5);
        assert_eq!(to_number("  -3 "), -3.0);
        assert_eq!(to_number("1e2"), 100.0);
    }

    #[test]
    fn garbage_and_empty_become_zero() {
        assert_eq!(to_number(""), 0.0);
        assert_eq!(to_number("   "), 0.0);
        assert_eq!(to_number("abc"), 0.0);
        assert_eq!(to_number("NaN"), 0.0);
        assert_eq!(to_number("inf"), 0.0);
        assert_eq!(coerce(None), 0.0);
    }

    #[test]
    fn reads_only_the_leading_number() {
        assert_eq!(to_number("10h"), 10.0);
        assert_eq!(to_number("12.5 hrs"), 12.5);
        assert_eq!(to_number("  7.5abc"), 7.5);
        assert_eq!(to_number("-.5x"), -0.5);
        assert_eq!(to_number("3."), 3.0);
        assert_eq!(to_number("2e3ft"), 2000.0);
        assert_eq!(to_number("4e"), 4.0);
        assert_eq!(to_number("1.2.3"), 1.2);
        assert_eq!(to_number("."), 0.0);
        assert_eq!(to_number("-"), 0.0);
        assert_eq!(to_number("h10"), 0.0);
        assert_eq!(to_number("1e999"), 0.0);
    }

    #[test]
    fn json_values_are_coerced() {
        assert_eq!(coerce_json(&json!(7)), 7.0);
        assert_eq!(coerce_json(&json!("8.25")), 8.25);
        assert_eq!(coerce_json(&json!("6 hours")), 6.0);
        assert_eq!(coerce_json(&json!(null)), 0.0);
        assert_eq!(coerce_json(&json!(true)), 0.0);
        assert_eq!(coerce_json(&json!([1, 2])), 0.0);
    }
}
