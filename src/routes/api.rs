//! Resource routes. Endpoints are mounted with `any` so method dispatch,
//! including the 405 body, stays in the handler rather than the router.
//! The explicit trailing-slash routes keep the empty-identifier case
//! (`DELETE /characters/`) reachable and deterministic.

use crate::handlers::resource::{characters, timeline_events};
use crate::state::AppState;
use axum::{routing::any, Router};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/characters", any(characters))
        .route("/characters/", any(characters))
        .route("/characters/:id", any(characters))
        .route("/timeline-events", any(timeline_events))
        .route("/timeline-events/", any(timeline_events))
        .route("/timeline-events/:id", any(timeline_events))
        .with_state(state)
}
