use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::api::helpers;

/// Problems found while reading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} environment variable not set")]
    Missing { name: &'static str },

    #[error("{name} has invalid value '{value}': {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Username '{0}' already exists")]
    Duplicate(String),
}

/// Errors surfaced to HTTP clients as `{"detail": ...}` bodies.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    #[must_use]
    pub fn username_taken(username: &str) -> Self {
        ApiError::Conflict(format!(
            "Username '{username}' already exists. Please choose a different username."
        ))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        helpers::detail_response(self.status(), &self.to_string())
    }
}
