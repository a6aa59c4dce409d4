//! Predicates for [`Check`](super::Check)s and the matching coercions.
//!
//! Predicates accept both native JSON values and their string spellings, since
//! path parameters always arrive as strings and form-driven clients often send
//! numbers quoted. Each `as_*` coercion succeeds exactly when its predicate
//! holds, so handlers can convert after validation without re-checking.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use validator::ValidateLength;

static INTEGER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+$").unwrap());

static DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?([0-9]*[.])?[0-9]+$").unwrap());

/// Integer that fits an `i32`
pub fn is_int(value: Option<&Value>) -> bool {
    as_i32(value).is_some()
}

/// JSON number or decimal string
pub fn is_numeric(value: Option<&Value>) -> bool {
    as_f64(value).is_some()
}

/// Present, not null, and not a blank string
pub fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => s.trim().validate_length(Some(1), None, None),
        Some(_) => true,
    }
}

/// A JSON string; absent values are left to [`is_present`]
pub fn is_text(value: Option<&Value>) -> bool {
    matches!(value, None | Some(Value::Null) | Some(Value::String(_)))
}

/// Numeric and strictly greater than zero
pub fn is_positive(value: Option<&Value>) -> bool {
    as_f64(value).is_some_and(|n| n > 0.0)
}

/// JSON boolean or the strings `"true"` / `"false"`
pub fn is_boolean(value: Option<&Value>) -> bool {
    as_bool(value).is_some()
}

pub fn as_i32(value: Option<&Value>) -> Option<i32> {
    match value? {
        Value::String(s) if INTEGER.is_match(s) => s.parse().ok(),
        Value::Number(n) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
        _ => None,
    }
}

pub fn as_f64(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) if DECIMAL.is_match(s) => s.parse().ok(),
        _ => None,
    }
}

pub fn as_bool(value: Option<&Value>) -> Option<bool> {
    match value? {
        Value::Bool(b) => Some(*b),
        Value::String(s) if s == "true" => Some(true),
        Value::String(s) if s == "false" => Some(false),
        _ => None,
    }
}

/// Trimmed string content
pub fn as_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.trim().to_string()),
        _ => None,
    }
}
