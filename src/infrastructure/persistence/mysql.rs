use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use tracing::{debug, info};

use super::UserStore;
use crate::core::config::DatabaseConfig;
use crate::core::models::{Credentials, NewUser};
use crate::errors::StoreError;

/// `UserStore` over a MySQL table with `firstname, lastname, email, mobile,
/// username, password` columns and a unique key on `username`.
///
/// Usernames and passwords match case-sensitively. The unique key must use a
/// binary collation (`utf8mb4_bin`, see `schema.sql`) for inserts to agree.
///
/// The table name is interpolated into SQL, so callers must only pass names
/// that passed `core::config::is_valid_table_name`.
#[derive(Debug, Clone)]
pub struct MySqlUserStore {
    pool: MySqlPool,
    table: String,
}

impl MySqlUserStore {
    #[must_use]
    pub fn new(pool: MySqlPool, table: impl Into<String>) -> Self {
        Self {
            pool,
            table: table.into(),
        }
    }

    /// Builds a pool that opens connections on first use.
    #[must_use]
    pub fn connect_lazy(config: &DatabaseConfig) -> Self {
        let options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.name);

        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect_lazy_with(options);

        info!(
            host = %config.host,
            port = config.port,
            database = %config.name,
            table = %config.table,
            "Configured MySQL user store"
        );

        Self::new(pool, config.table.clone())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

// Comparisons are byte-exact whatever the column collation, so `TestUser`
// and `testuser` are different users and password case matters.
fn exists_sql(table: &str) -> String {
    format!("SELECT COUNT(*) FROM `{table}` WHERE username = ? COLLATE utf8mb4_bin")
}

fn insert_sql(table: &str) -> String {
    format!(
        "INSERT INTO `{table}` (firstname, lastname, email, mobile, username, password) \
         VALUES (?, ?, ?, ?, ?, ?)"
    )
}

fn verify_sql(table: &str) -> String {
    format!(
        "SELECT COUNT(*) FROM `{table}` \
         WHERE username = ? COLLATE utf8mb4_bin AND password = ? COLLATE utf8mb4_bin"
    )
}

#[async_trait]
impl UserStore for MySqlUserStore {
    async fn username_exists(&self, username: &str) -> Result<bool, StoreError> {
        let count: i64 = sqlx::query_scalar(&exists_sql(&self.table))
            .bind(username)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }

    async fn insert_user(&self, user: &NewUser) -> Result<(), StoreError> {
        let result = sqlx::query(&insert_sql(&self.table))
            .bind(&user.firstname)
            .bind(&user.lastname)
            .bind(&user.email)
            .bind(&user.mobile)
            .bind(&user.username)
            .bind(&user.password)
            .execute(&self.pool)
            .await;

        match result {
            Ok(done) => {
                debug!(rows = done.rows_affected(), username = %user.username, "Inserted user");
                Ok(())
            }
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Err(StoreError::Duplicate(user.username.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn verify_password(&self, credentials: &Credentials) -> Result<bool, StoreError> {
        let count: i64 = sqlx::query_scalar(&verify_sql(&self.table))
            .bind(&credentials.username)
            .bind(&credentials.password)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statements_quote_the_table_and_bind_every_value() {
        assert_eq!(
            exists_sql("userinfo"),
            "SELECT COUNT(*) FROM `userinfo` WHERE username = ? COLLATE utf8mb4_bin"
        );
        assert_eq!(
            verify_sql("accounts"),
            "SELECT COUNT(*) FROM `accounts` \
             WHERE username = ? COLLATE utf8mb4_bin AND password = ? COLLATE utf8mb4_bin"
        );

        let insert = insert_sql("userinfo");
        assert!(insert.starts_with("INSERT INTO `userinfo` ("));
        assert_eq!(insert.matches('?').count(), 6);
        assert!(!insert.contains("testuser"));
    }

    #[test]
    fn credential_comparisons_are_case_sensitive() {
        for sql in [exists_sql("userinfo"), verify_sql("userinfo")] {
            let comparisons = sql.matches(" = ?").count();
            assert!(comparisons > 0);
            assert_eq!(sql.matches("= ? COLLATE utf8mb4_bin").count(), comparisons);
        }
    }
}
