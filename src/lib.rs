//! Chronicle API: CRUD HTTP backend for story characters and timeline
//! events, backed by a managed Postgres REST service.

pub mod config;
pub mod error;
pub mod handlers;
pub mod resource;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::AppError;
pub use resource::{last_path_segment, Resource, CHARACTERS, TIMELINE_EVENTS};
pub use routes::{api_routes, common_routes};
pub use state::AppState;
pub use store::{RestStore, StoreError, TableStore};
