//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::store::StoreError;

/// Request-level errors, mapped to the wire contract by [`IntoResponse`].
#[derive(Error, Debug)]
pub enum AppError {
    /// DELETE/PUT without an identifier in the request path.
    #[error("Missing {0} ID")]
    MissingId(&'static str),
    /// Unrecognized HTTP method on a resource endpoint.
    #[error("Method not allowed")]
    MethodNotAllowed,
    /// Backend failure. The message reaches the client verbatim.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::MissingId(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = serde_json::json!({ "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}
