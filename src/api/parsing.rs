use serde_json::{Map, Value};

use crate::errors::ApiError;

pub const NOT_JSON: &str = "Request body must be JSON";

/// Decodes a request body into a non-empty JSON object.
///
/// The `Content-Type` header is not consulted; only the bytes matter.
///
/// # Errors
///
/// Returns `ApiError::BadRequest` for empty bodies, malformed JSON, non-object
/// values and `{}`.
pub fn parse_json_object(body: &[u8]) -> Result<Map<String, Value>, ApiError> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) if !map.is_empty() => Ok(map),
        _ => Err(ApiError::BadRequest(NOT_JSON.to_string())),
    }
}
