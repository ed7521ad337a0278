//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks (non-success → [`ClientError::Api`] with
//! FastAPI's `detail` extracted) and body decoding so endpoint modules stay
//! focused on request construction and envelope mapping.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ClientError;

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success. Otherwise reads the body and
/// returns [`ClientError::Api`] with the backend's explanation.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ClientError::Api {
        status: status.as_u16(),
        message: error_message(&body),
    })
}

/// Decode a successful response body as `T`.
///
/// The body is read as text first so a shape mismatch reports which endpoint
/// produced it.
pub async fn decode<T: DeserializeOwned>(
    resp: reqwest::Response,
    path: &str,
) -> Result<T, ClientError> {
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|e| ClientError::Decode {
        path: path.to_string(),
        reason: e.to_string(),
    })
}

/// FastAPI error bodies look like `{"detail": "..."}`, or for request
/// validation failures `{"detail": [{"loc": [...], "msg": "..."}]}`.
/// Anything else is returned verbatim.
fn error_message(body: &str) -> String {
    let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) else {
        return body.trim().to_string();
    };
    match map.get("detail") {
        Some(Value::String(detail)) => detail.clone(),
        Some(Value::Array(items)) => {
            let messages: Vec<String> = items.iter().map(validation_message).collect();
            messages.join("; ")
        }
        _ => body.trim().to_string(),
    }
}

fn validation_message(item: &Value) -> String {
    let msg = item.get("msg").and_then(Value::as_str).unwrap_or("invalid");
    let field = item
        .get("loc")
        .and_then(Value::as_array)
        .and_then(|loc| loc.last())
        .map(|last| last.as_str().map_or_else(|| last.to_string(), str::to_string));
    match field {
        Some(field) => format!("{field}: {msg}"),
        None => msg.to_string(),
    }
}
