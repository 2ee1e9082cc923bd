//! Loose comparison of assertion operands.
//!
//! `assert_same` compares type and value. Containment checks are looser: a
//! number matches an equal number of another representation or a numeric
//! string, and a needle searched in text is first turned into its plain text
//! form.

use serde_json::{Number, Value};

/// Returns true when `a` and `b` are equal after type juggling.
///
/// - a boolean on either side compares against the truthiness of the other
/// - numbers compare by value (`1` equals `1.0`)
/// - a number equals a numeric string with the same value (`1` equals `"1"`),
///   otherwise its text must equal the string
/// - two numeric strings compare by value (`"1"` equals `"01"`)
/// - `null` equals an empty string or an empty array
/// - arrays and objects compare element by element
#[must_use]
pub fn loosely_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Bool(flag), other) | (other, Value::Bool(flag)) => is_truthy(other) == *flag,
        (Value::Null, Value::Null) => true,
        (Value::Null, Value::String(text)) | (Value::String(text), Value::Null) => text.is_empty(),
        (Value::Null, Value::Array(items)) | (Value::Array(items), Value::Null) => items.is_empty(),
        (Value::Number(x), Value::Number(y)) => same_number(x.as_f64(), y.as_f64()),
        (Value::Number(n), Value::String(text)) | (Value::String(text), Value::Number(n)) => {
            numeric_value(text).map_or_else(
                || number_text(n) == *text,
                |parsed| same_number(n.as_f64(), Some(parsed)),
            )
        }
        (Value::String(x), Value::String(y)) => match (numeric_value(x), numeric_value(y)) {
            (Some(left), Some(right)) => same_number(Some(left), Some(right)),
            _ => x == y,
        },
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(l, r)| loosely_equal(l, r))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter()
                    .all(|(key, l)| y.get(key).is_some_and(|r| loosely_equal(l, r)))
        }
        _ => false,
    }
}

/// Plain text form of a value, as used for substring search.
///
/// Strings are returned as-is, `true` becomes `"1"`, `false` and `null`
/// become `""`, integral floats lose their fraction (`1.0` becomes `"1"`).
/// Arrays and objects fall back to compact JSON.
#[must_use]
pub fn as_text(value: &Value) -> String {
    match value {
        Value::Null | Value::Bool(false) => String::new(),
        Value::Bool(true) => "1".to_string(),
        Value::Number(n) => number_text(n),
        Value::String(text) => text.clone(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        Value::String(text) => !text.is_empty() && text != "0",
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

#[allow(clippy::float_cmp)]
fn same_number(x: Option<f64>, y: Option<f64>) -> bool {
    matches!((x, y), (Some(l), Some(r)) if l == r)
}

fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(v) if n.is_f64() && v.fract() == 0.0 && v.abs() < 1e15 => format!("{v:.0}"),
        _ => n.to_string(),
    }
}

/// Parses `text` when it is a decimal or exponent number, surrounding
/// whitespace allowed.
fn numeric_value(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let plausible = trimmed.bytes().any(|b| b.is_ascii_digit())
        && trimmed
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if plausible {
        trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
    } else {
        None
    }
}
