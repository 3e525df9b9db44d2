//! Unwrapping of `{ "<field>": ... } | { "error": "..." }` response bodies.

use crate::{GatewayError, GatewayResult};

use serde::de::DeserializeOwned;
use serde_json::Value;

/// The domain error carried by a body, if any.
pub fn rejection(body: &Value) -> Option<&str> {
    body.get("error").and_then(Value::as_str)
}

/// Pulls `field` out of a body and deserializes it.
#[track_caller]
pub fn take_field<T: DeserializeOwned>(mut body: Value, field: &'static str) -> GatewayResult<T> {
    let value = match body.get_mut(field).map(Value::take) {
        Some(value) if !value.is_null() => value,
        _ => return Err(GatewayError::missing_field(field)),
    };

    Ok(serde_json::from_value(value)?)
}
