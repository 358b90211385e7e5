//! Response body helpers: single-key JSON envelopes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{Map, Value};

/// `{<key>: value}` with the given status. The key is the resource's
/// singular or plural name depending on the payload shape.
pub fn keyed(status: StatusCode, key: &str, value: Value) -> Response {
    let mut body = Map::new();
    body.insert(key.to_string(), value);
    (status, Json(Value::Object(body))).into_response()
}

/// `200 {"message": <text>}`.
pub fn message_ok(text: String) -> Response {
    (StatusCode::OK, Json(serde_json::json!({ "message": text }))).into_response()
}
