//! HTTP API router.

use crate::handlers;
use crate::trace::trace_id_middleware;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use quayside_core::ImageSelector;
use std::sync::Arc;

/// Application state shared with handlers.
#[derive(Clone)]
pub struct AppState {
    /// Image selection core.
    pub selector: Arc<ImageSelector>,
}

/// Creates the API router with all endpoints.
#[must_use]
pub fn create_router(selector: Arc<ImageSelector>) -> Router {
    let state = AppState { selector };

    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/image/{project_id}", get(handlers::list_project_images))
        .route("/api/image/{project_id}", post(handlers::set_active_image))
        .layer(middleware::from_fn(trace_id_middleware))
        .with_state(state)
}
