//! Server entry point: reads env configuration, builds the REST store,
//! mounts common and resource routes.

use axum::Router;
use chronicle_api::{api_routes, common_routes, AppConfig, AppState, RestStore};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("chronicle_api=info".parse()?))
        .init();

    let config = AppConfig::from_env()?;
    let store = Arc::new(RestStore::new(&config));
    let state = AppState { store };

    let app = Router::new()
        .merge(common_routes())
        .merge(api_routes(state))
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(config.listen_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
