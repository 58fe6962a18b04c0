//! Coercions shared by rule checks and payload conversion, so a value that
//! passed a check converts to the same thing a handler receives.

use serde_json::{Map, Value};

/// Trimmed text of a string value
pub fn trimmed_text(value: &Value) -> Option<&str> {
    value.as_str().map(str::trim)
}

/// Finite number from a JSON number or a numeric string
pub fn number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

/// Non-null value of `field`
pub fn present<'a>(fields: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    fields.get(field).filter(|value| !value.is_null())
}
