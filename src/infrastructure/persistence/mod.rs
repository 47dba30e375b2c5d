//! Persistence layer abstractions.
//!
//! This module contains the user storage seam:
//! - `UserStore`, the interface the HTTP handlers depend on
//! - `MySqlUserStore`, backed by a sqlx connection pool
//! - `InMemoryUserStore`, for tests and local runs without a database

pub mod memory;
pub mod mysql;

use async_trait::async_trait;
use std::time::Duration;
use tokio_retry::strategy::jitter;
use tokio_retry::{Retry, strategy::ExponentialBackoff};
use tracing::warn;

use crate::core::models::{Credentials, NewUser};
use crate::errors::StoreError;

pub use memory::InMemoryUserStore;
pub use mysql::MySqlUserStore;

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn username_exists(&self, username: &str) -> Result<bool, StoreError>;

    /// # Errors
    ///
    /// Returns `StoreError::Duplicate` if the username is already taken.
    async fn insert_user(&self, user: &NewUser) -> Result<(), StoreError>;

    async fn verify_password(&self, credentials: &Credentials) -> Result<bool, StoreError>;

    /// Cheap round trip used to check the backend is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Pings the store until it answers, retrying up to `retries` times.
///
/// # Errors
///
/// Returns the last ping error once the retries are exhausted.
pub async fn wait_until_ready(store: &dyn UserStore, retries: usize) -> Result<(), StoreError> {
    let strategy = ExponentialBackoff::from_millis(2)
        .factor(100)
        .max_delay(Duration::from_secs(5))
        .map(jitter)
        .take(retries);

    Retry::start(strategy, move || async move {
        store.ping().await.inspect_err(|e| {
            warn!(error = %e, "User store not ready");
        })
    })
    .await
}
