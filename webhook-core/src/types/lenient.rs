//! Per-field decoders that never fail on valid JSON.
//!
//! A `null` or wrongly typed leaf becomes the field's default (or `None`) instead of
//! rejecting the whole update. Malformed JSON still fails in the outer decoder.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Value>::deserialize(deserializer)
}

/// Integer value of a JSON number, accepting floats with no fractional part (`42.0`).
fn as_i64(value: &Value) -> Option<i64> {
    let Value::Number(n) = value else {
        return None;
    };
    n.as_i64().or_else(|| {
        n.as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
            .map(|f| f as i64)
    })
}

pub(crate) fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_string(deserializer)?.unwrap_or_default())
}

pub(crate) fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match value(deserializer)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

/// String field that may also arrive as an integer; the integer keeps its decimal form.
pub(crate) fn string_or_int<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match value(deserializer)? {
        Some(Value::String(s)) => s,
        Some(v) => as_i64(&v).map(|n| n.to_string()).unwrap_or_default(),
        None => String::new(),
    })
}

pub(crate) fn int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_int(deserializer)?.unwrap_or_default())
}

pub(crate) fn opt_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value(deserializer)?.as_ref().and_then(as_i64))
}

pub(crate) fn float<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value(deserializer)?
        .as_ref()
        .and_then(Value::as_f64)
        .unwrap_or_default())
}

pub(crate) fn boolean<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value(deserializer)?
        .as_ref()
        .and_then(Value::as_bool)
        .unwrap_or_default())
}

/// Nested object; anything that does not decode as `T` is absent.
pub(crate) fn object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(value(deserializer)?.and_then(|v| T::deserialize(v).ok()))
}
