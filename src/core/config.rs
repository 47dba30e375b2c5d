use std::env;
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ConfigError;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_TABLE: &str = "userinfo";
pub const DEFAULT_DB_PORT: u16 = 3306;
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 8;
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

static TABLE_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]{0,63}$").expect("static regex compile"));

/// Connection settings for the MySQL user table.
#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,
    pub table: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub connect_retries: usize,
}

// Hand-written so the password never reaches the logs.
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("table", &self.table)
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout", &self.acquire_timeout)
            .field("connect_retries", &self.connect_retries)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub bind_addr: SocketAddr,
    pub min_password_length: usize,
    pub max_body_bytes: usize,
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or any value fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or any value fails to parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| -> Result<String, ConfigError> {
            lookup(name)
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing { name })
        };

        let table = lookup("DB_TABLE").unwrap_or_else(|| DEFAULT_TABLE.to_string());
        if !is_valid_table_name(&table) {
            return Err(ConfigError::Invalid {
                name: "DB_TABLE",
                value: table,
                reason: "expected a plain SQL identifier".to_string(),
            });
        }

        let database = DatabaseConfig {
            host: required("DB_HOST")?,
            port: parse_or(&lookup, "DB_PORT", DEFAULT_DB_PORT)?,
            name: required("DB_NAME")?,
            user: required("DB_USER")?,
            // An empty password is a valid MySQL credential.
            password: lookup("DB_PASSWORD").ok_or(ConfigError::Missing {
                name: "DB_PASSWORD",
            })?,
            table,
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 10)?,
            acquire_timeout: Duration::from_secs(parse_or(&lookup, "DB_ACQUIRE_TIMEOUT_SECS", 5)?),
            connect_retries: parse_or(&lookup, "DB_CONNECT_RETRIES", 5)?,
        };

        if database.max_connections == 0 {
            return Err(ConfigError::Invalid {
                name: "DB_MAX_CONNECTIONS",
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => parse_value("BIND_ADDR", &raw)?,
            None => SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
        };

        Ok(Self {
            database,
            bind_addr,
            min_password_length: parse_or(
                &lookup,
                "MIN_PASSWORD_LENGTH",
                DEFAULT_MIN_PASSWORD_LENGTH,
            )?,
            max_body_bytes: parse_or(&lookup, "MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES)?,
        })
    }
}

#[must_use]
pub fn is_valid_table_name(name: &str) -> bool {
    TABLE_NAME_RE.is_match(name)
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: fmt::Display,
{
    match lookup(name) {
        Some(raw) => parse_value(name, &raw),
        None => Ok(default),
    }
}

fn parse_value<T>(name: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
        name,
        value: raw.to_string(),
        reason: e.to_string(),
    })
}
