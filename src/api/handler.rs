//! Endpoint handlers.
//!
//! - `POST /users/`: validate a signup body, reject taken usernames and weak
//!   passwords, store the record and echo it back without the password
//! - `POST /password/`: check a username/password pair
//! - `GET /healthz`: liveness probe

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use serde_json::{Value, json};
use tracing::{error, info, warn};

use super::{AppState, helpers, parsing};
use crate::core::models::PublicUser;
use crate::core::validation;
use crate::errors::{ApiError, StoreError};

const CREATE_FAILED: &str = "Failed to create user due to a database error.";
const VERIFY_FAILED: &str = "Failed to verify password due to a database error.";

/// Creates a user record.
///
/// # Errors
///
/// 400 for malformed bodies, missing or non-string fields and short
/// passwords; 409 when the username is taken; 500 when the store fails.
#[tracing::instrument(level = "info", skip(state, body))]
pub async fn create_user(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<PublicUser>), ApiError> {
    let object = parsing::parse_json_object(&body)?;
    let user = validation::new_user_from_json(&object)?;

    match state.store.username_exists(&user.username).await {
        Ok(true) => {
            info!(username = %user.username, "Rejected signup for existing username");
            return Err(ApiError::username_taken(&user.username));
        }
        Ok(false) => {}
        Err(e) => {
            error!(error = %e, "Username lookup failed");
            return Err(ApiError::Internal(CREATE_FAILED.to_string()));
        }
    }

    validation::check_password_strength(&user.password, state.min_password_length)?;

    match state.store.insert_user(&user).await {
        Ok(()) => {
            info!(username = %user.username, "User created");
            Ok((StatusCode::CREATED, Json(PublicUser::from(&user))))
        }
        Err(StoreError::Duplicate(username)) => {
            warn!(username = %username, "Username taken between lookup and insert");
            Err(ApiError::username_taken(&username))
        }
        Err(e) => {
            error!(error = %e, "User insert failed");
            Err(ApiError::Internal(CREATE_FAILED.to_string()))
        }
    }
}

/// Verifies a username/password pair.
///
/// # Errors
///
/// 400 for malformed bodies or missing credentials; 500 when the store fails.
/// A wrong password is not an error: it yields a 401 response.
#[tracing::instrument(level = "info", skip(state, body))]
pub async fn verify_password(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let object = parsing::parse_json_object(&body)?;
    let credentials = validation::credentials_from_json(&object)?;

    match state.store.verify_password(&credentials).await {
        Ok(true) => {
            info!(username = %credentials.username, "Password verified");
            Ok(helpers::message_response(
                StatusCode::OK,
                "Password is correct.",
            ))
        }
        Ok(false) => {
            info!(username = %credentials.username, "Password rejected");
            Ok(helpers::message_response(
                StatusCode::UNAUTHORIZED,
                "Invalid username or password.",
            ))
        }
        Err(e) => {
            error!(error = %e, "Password lookup failed");
            Err(ApiError::Internal(VERIFY_FAILED.to_string()))
        }
    }
}

pub async fn healthz() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
