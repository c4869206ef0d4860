//! Forgiving decoders for fields produced by collaborators we do not control.
//!
//! A malformed field degrades to "absent" instead of failing the record.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::Value;

use crate::types::ClientId;

/// Decodes a display text field. Empty strings, `null` and compound values are absent.
pub fn text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(text) => {
            let text = text.trim();
            (!text.is_empty()).then(|| text.to_string())
        }
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None
    }
}

/// Decodes a numeric amount from a JSON number or a numeric string.
pub fn decimal(value: Option<&Value>) -> Option<Decimal> {
    match value? {
        Value::Number(number) => parse_decimal(&number.to_string()),
        Value::String(text) => parse_decimal(text.trim()),
        _ => None
    }
}

/// Interprets an indicator value. Anything that is not clearly "set" is false.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|number| number != 0.0),
        Value::String(text) => matches!(text.trim().to_lowercase().as_str(), "true" | "1" | "yes" | "t"),
        Value::Null | Value::Array(_) | Value::Object(_) => false
    }
}

/// Decodes a client identity without normalising it.
///
/// Strings are kept byte for byte, numbers and booleans become
/// [`ClientId::Scalar`]. Only a missing field, `null`, an empty string or a
/// compound value count as "no identity".
pub fn identity(value: Option<&Value>) -> Option<ClientId> {
    match value? {
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(ClientId::Known(text.clone())),
        scalar @ (Value::Number(_) | Value::Bool(_)) => Some(ClientId::Scalar(scalar.to_string())),
        Value::Null | Value::Array(_) | Value::Object(_) => None
    }
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    if text.is_empty() {
        return None;
    }

    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}
