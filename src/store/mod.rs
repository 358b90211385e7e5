//! Database client contract and its REST implementation.
//!
//! Handlers depend only on [`TableStore`]; storage, constraints, and query
//! planning all live in the external service behind this trait.

mod rest;

pub use rest::RestStore;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors surfaced by the external database service.
///
/// `Display` is exactly the backend's own message; handlers return it to
/// the client without rewording.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The service answered with an error payload.
    #[error("{message}")]
    Backend { message: String },
    /// The request never completed (connectivity, TLS, body decode).
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

/// Table-scoped CRUD primitives over the managed store.
///
/// One call is one backend operation. Implementations add no retry,
/// caching, or local validation; bad rows are the backend's to reject.
#[async_trait]
pub trait TableStore: Send + Sync {
    /// All rows of `table`.
    async fn select_all(&self, table: &str) -> Result<Vec<Value>, StoreError>;

    /// Insert one row and return the stored representation.
    async fn insert(&self, table: &str, row: Value) -> Result<Value, StoreError>;

    /// Apply `patch` to the row whose `id` column equals `id`, returning
    /// the updated representation.
    async fn update(&self, table: &str, id: &str, patch: Value) -> Result<Value, StoreError>;

    /// Delete the row whose `id` column equals `id`.
    async fn delete(&self, table: &str, id: &str) -> Result<(), StoreError>;

    /// Column names of `table`, from the service's schema description.
    /// Used by the schema probe only.
    async fn table_columns(&self, table: &str) -> Result<Vec<String>, StoreError>;
}
