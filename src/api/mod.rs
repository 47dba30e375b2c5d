//! HTTP API: routing, request parsing and response building

pub mod handler;
pub mod helpers;
pub mod parsing;
pub mod request_tracing;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::{Router, middleware};
use std::sync::Arc;

use crate::infrastructure::persistence::UserStore;

/// Shared state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub min_password_length: usize,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn UserStore>, min_password_length: usize) -> Self {
        Self {
            store,
            min_password_length,
        }
    }
}

/// Builds the service router.
///
/// Both endpoints answer with and without the trailing slash.
pub fn build_router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/users/", post(handler::create_user))
        .route("/users", post(handler::create_user))
        .route("/password/", post(handler::verify_password))
        .route("/password", post(handler::verify_password))
        .route("/healthz", get(handler::healthz))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(middleware::from_fn(request_tracing::request_tracing_middleware))
        .with_state(state)
}
