//! Axum HTTP server exposing per-page PDF text extraction with backend
//! fallback. The router is built here so integration tests can drive it
//! in-process; `main.rs` only wires configuration and serves it.

pub mod handlers;
pub mod models;
pub mod state;
pub mod upload;

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;

use state::AppState;

/// Build the application router.
pub fn app(state: Arc<AppState>, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/extract/pdf", post(handlers::extract::extract))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
