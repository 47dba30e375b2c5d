#![allow(dead_code)]

use async_trait::async_trait;
use std::net::SocketAddr;
use std::sync::Arc;

use userinfo::StoreError;
use userinfo::api::{AppState, build_router};
use userinfo::core::models::{Credentials, NewUser};
use userinfo::infrastructure::persistence::{InMemoryUserStore, UserStore};

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_BODY_BYTES: usize = 4 * 1024;

/// Store whose every call fails like an unreachable database.
#[derive(Debug, Default)]
pub struct UnavailableStore;

#[async_trait]
impl UserStore for UnavailableStore {
    async fn username_exists(&self, _username: &str) -> Result<bool, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn insert_user(&self, _user: &NewUser) -> Result<(), StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn verify_password(&self, _credentials: &Credentials) -> Result<bool, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }
}

/// Store that reports every username as free but refuses inserts as
/// duplicates, as when a concurrent signup wins the race.
#[derive(Debug, Default)]
pub struct RacingStore;

#[async_trait]
impl UserStore for RacingStore {
    async fn username_exists(&self, _username: &str) -> Result<bool, StoreError> {
        Ok(false)
    }

    async fn insert_user(&self, user: &NewUser) -> Result<(), StoreError> {
        Err(StoreError::Duplicate(user.username.clone()))
    }

    async fn verify_password(&self, _credentials: &Credentials) -> Result<bool, StoreError> {
        Ok(false)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

pub struct TestApp {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn post_raw(&self, path: &str, body: impl Into<reqwest::Body>) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .expect("send request")
    }

    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> reqwest::Response {
        self.post_raw(path, body.to_string()).await
    }
}

pub async fn spawn_app(store: Arc<dyn UserStore>) -> TestApp {
    let app = build_router(AppState::new(store, MIN_PASSWORD_LENGTH), MAX_BODY_BYTES);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });

    TestApp {
        addr,
        client: reqwest::Client::new(),
    }
}

pub async fn spawn_in_memory() -> (TestApp, Arc<InMemoryUserStore>) {
    let store = Arc::new(InMemoryUserStore::default());
    let app = spawn_app(store.clone()).await;
    (app, store)
}

pub fn signup_body() -> serde_json::Value {
    serde_json::json!({
        "firstname": "Test",
        "lastname": "User",
        "email": "test.user@example.com",
        "mobile": "1122334455",
        "username": "testuser",
        "password": "securepassword123"
    })
}
