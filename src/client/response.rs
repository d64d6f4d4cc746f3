//! Response validation into typed read schemas.

use crate::error::ClientError;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

const MAX_ERROR_BODY_CHARS: usize = 200;

/// Decode a body that must hold exactly one instance of `T`.
pub fn decode_one<T: DeserializeOwned>(body: &[u8]) -> Result<T, ClientError> {
    let value = parse_body(body)?;
    if let Value::Array(items) = &value {
        return Err(ClientError::Schema(format!(
            "expected a single {}, got an array of {} item(s)",
            schema_name::<T>(),
            items.len()
        )));
    }
    serde_json::from_value(value)
        .map_err(|e| ClientError::Schema(format!("invalid {}: {}", schema_name::<T>(), e)))
}

/// Decode a body that must hold a JSON array of `T`, preserving order.
pub fn decode_many<T: DeserializeOwned>(body: &[u8]) -> Result<Vec<T>, ClientError> {
    let items = match parse_body(body)? {
        Value::Array(items) => items,
        other => {
            return Err(ClientError::Schema(format!(
                "expected an array of {}, got {}",
                schema_name::<T>(),
                json_kind(&other)
            )))
        }
    };
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|e| {
                ClientError::Schema(format!(
                    "invalid {} at index {}: {}",
                    schema_name::<T>(),
                    index,
                    e
                ))
            })
        })
        .collect()
}

/// Human-readable message for a non-2xx response.
///
/// Prefers the `detail` field of a JSON error body, then the raw body, then
/// the status reason phrase.
pub fn error_message(status: StatusCode, body: &[u8]) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_slice::<Value>(body) {
        match map.get("detail") {
            Some(Value::String(detail)) => return detail.clone(),
            Some(detail) => return detail.to_string(),
            None => {}
        }
    }
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if !text.is_empty() {
        return text.chars().take(MAX_ERROR_BODY_CHARS).collect();
    }
    status
        .canonical_reason()
        .unwrap_or("unknown error")
        .to_string()
}

fn parse_body(body: &[u8]) -> Result<Value, ClientError> {
    serde_json::from_slice(body)
        .map_err(|e| ClientError::Schema(format!("response body is not valid JSON: {}", e)))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn schema_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
