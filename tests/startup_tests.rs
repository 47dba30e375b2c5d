mod common;

use userinfo::StoreError;
use userinfo::infrastructure::persistence::{InMemoryUserStore, wait_until_ready};

use common::UnavailableStore;

#[tokio::test]
async fn test_reachable_store_is_ready_immediately() {
    let store = InMemoryUserStore::default();
    assert!(wait_until_ready(&store, 0).await.is_ok());
}

#[tokio::test]
async fn test_unreachable_store_fails_after_retries() {
    let result = wait_until_ready(&UnavailableStore, 1).await;
    assert!(matches!(result, Err(StoreError::Database(_))));
}
