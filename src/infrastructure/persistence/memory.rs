use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::UserStore;
use crate::core::models::{Credentials, NewUser};
use crate::errors::StoreError;

/// Keeps users in a map keyed by username. Contents are lost on drop.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, NewUser>>,
}

impl InMemoryUserStore {
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn username_exists(&self, username: &str) -> Result<bool, StoreError> {
        Ok(self.users.read().await.contains_key(username))
    }

    async fn insert_user(&self, user: &NewUser) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.username) {
            return Err(StoreError::Duplicate(user.username.clone()));
        }
        users.insert(user.username.clone(), user.clone());
        Ok(())
    }

    async fn verify_password(&self, credentials: &Credentials) -> Result<bool, StoreError> {
        Ok(self
            .users
            .read()
            .await
            .get(&credentials.username)
            .is_some_and(|user| user.password == credentials.password))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
