//! Method-polymorphic CRUD handlers for the resource endpoints.
//!
//! Each endpoint dispatches on the HTTP method and runs exactly one
//! backend operation per request. Bodies are untyped JSON passed through
//! to the backend unchanged; this layer performs no schema validation
//! (the database's own constraints are the validator).

use crate::error::AppError;
use crate::resource::{self, last_path_segment, Resource};
use crate::response;
use crate::state::AppState;
use axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
    response::Response,
    Json,
};
use serde_json::Value;

/// `/characters` and `/characters/{id}`, all methods.
pub async fn characters(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    body: Option<Json<Value>>,
) -> Result<Response, AppError> {
    dispatch(&resource::CHARACTERS, &state, &method, &uri, body.map(|Json(v)| v)).await
}

/// `/timeline-events` and `/timeline-events/{id}`, all methods.
pub async fn timeline_events(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    body: Option<Json<Value>>,
) -> Result<Response, AppError> {
    dispatch(&resource::TIMELINE_EVENTS, &state, &method, &uri, body.map(|Json(v)| v)).await
}

async fn dispatch(
    resource: &Resource,
    state: &AppState,
    method: &Method,
    uri: &Uri,
    body: Option<Value>,
) -> Result<Response, AppError> {
    match *method {
        Method::GET => {
            let rows = state.store.select_all(resource.table).await?;
            Ok(response::keyed(
                StatusCode::OK,
                resource.plural,
                Value::Array(rows),
            ))
        }
        Method::POST => {
            // The new row rides under the singular key; an absent or
            // malformed key is forwarded as null and left to the backend's
            // validation rather than detected here.
            let row = body
                .as_ref()
                .and_then(|b| b.get(resource.singular))
                .cloned()
                .unwrap_or(Value::Null);
            let inserted = state.store.insert(resource.table, row).await?;
            Ok(response::keyed(
                StatusCode::CREATED,
                resource.singular,
                inserted,
            ))
        }
        Method::DELETE => {
            let id = require_id(resource, uri)?;
            state.store.delete(resource.table, id).await?;
            Ok(response::message_ok(format!("{} deleted", resource.display)))
        }
        Method::PUT => {
            let id = require_id(resource, uri)?;
            // The whole body is the update patch; no field whitelist.
            let patch = body.unwrap_or(Value::Null);
            let updated = state.store.update(resource.table, id, patch).await?;
            Ok(response::keyed(
                StatusCode::OK,
                resource.singular,
                updated,
            ))
        }
        _ => Err(AppError::MethodNotAllowed),
    }
}

fn require_id<'a>(resource: &Resource, uri: &'a Uri) -> Result<&'a str, AppError> {
    last_path_segment(uri.path()).ok_or(AppError::MissingId(resource.singular))
}
