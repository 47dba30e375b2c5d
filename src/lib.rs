//! userinfo - a small HTTP service that registers users and verifies their passwords.
//!
//! The crate exposes the pieces the `userinfo-api` binary wires together:
//! 1. Environment configuration (`core::config`)
//! 2. Request validation and the user model (`core`)
//! 3. An axum router with the `/users/` and `/password/` endpoints (`api`)
//! 4. The `UserStore` persistence seam with MySQL and in-memory backends
//!    (`infrastructure::persistence`)
//!
//! # Architecture
//!
//! The system uses:
//! - axum for HTTP routing on a Tokio runtime
//! - sqlx for pooled MySQL access
//! - tracing with a JSON subscriber for structured logs
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use userinfo::api::{AppState, build_router};
//! use userinfo::infrastructure::persistence::InMemoryUserStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     userinfo::setup_logging();
//!
//!     let state = AppState::new(Arc::new(InMemoryUserStore::default()), 8);
//!     let app = build_router(state, 64 * 1024);
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:5000").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
pub mod api;
pub mod core;
pub mod errors;
pub mod infrastructure;

pub use errors::{ApiError, ConfigError, StoreError};

/// Configure structured logging with JSON output.
///
/// The filter comes from `RUST_LOG` and falls back to `info`. Calling this
/// more than once is harmless: later calls leave the first subscriber in
/// place.
///
/// # Example
///
/// ```
/// userinfo::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
