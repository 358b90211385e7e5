//! Shared application state for all routes.

use crate::store::TableStore;
use std::sync::Arc;

/// Immutable per-process state: one store reference, built once in `main`
/// and cloned into every handler invocation.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TableStore>,
}
