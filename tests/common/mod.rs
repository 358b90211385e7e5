//! Shared test fixtures: a scripted in-memory store and request helpers.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use chronicle_api::{api_routes, AppState, StoreError, TableStore};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// Scripted [`TableStore`]: returns canned values and records every
/// backend operation so tests can assert how many ran and with what.
#[derive(Default)]
pub struct MockStore {
    /// Rows returned by `select_all`.
    pub rows: Vec<Value>,
    /// Row returned by `insert` and `update`.
    pub row: Value,
    /// When set, every operation fails with this backend message.
    pub fail_with: Option<String>,
    /// One entry per backend operation invoked.
    pub calls: Mutex<Vec<String>>,
}

impl MockStore {
    fn record(&self, call: String) -> Result<(), StoreError> {
        self.calls.lock().unwrap().push(call);
        match &self.fail_with {
            Some(message) => Err(StoreError::Backend {
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }

    pub fn call_log(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TableStore for MockStore {
    async fn select_all(&self, table: &str) -> Result<Vec<Value>, StoreError> {
        self.record(format!("select_all {table}"))?;
        Ok(self.rows.clone())
    }

    async fn insert(&self, table: &str, row: Value) -> Result<Value, StoreError> {
        self.record(format!("insert {table} {row}"))?;
        Ok(self.row.clone())
    }

    async fn update(&self, table: &str, id: &str, patch: Value) -> Result<Value, StoreError> {
        self.record(format!("update {table} id={id} {patch}"))?;
        Ok(self.row.clone())
    }

    async fn delete(&self, table: &str, id: &str) -> Result<(), StoreError> {
        self.record(format!("delete {table} id={id}"))
    }

    async fn table_columns(&self, table: &str) -> Result<Vec<String>, StoreError> {
        self.record(format!("table_columns {table}"))?;
        Ok(Vec::new())
    }
}

pub fn build_test_app(store: Arc<MockStore>) -> Router {
    api_routes(AppState { store })
}

/// Sends one request through the router. A `Some` body is serialized as
/// JSON with the matching content type.
pub async fn request(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            builder = builder.header("content-type", "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
