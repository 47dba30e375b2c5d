//! Request-body validation for the user endpoints.
//!
//! Checks run in a fixed order so clients always see the same first error:
//! missing fields, then field types, then (after the uniqueness lookup the
//! handler performs) password strength.

use serde_json::{Map, Value};

use super::models::{Credentials, NewUser};
use crate::errors::ApiError;

/// Fields a user-creation body must carry, in the order they are checked.
pub const REQUIRED_USER_FIELDS: [&str; 6] = [
    "firstname",
    "lastname",
    "email",
    "mobile",
    "username",
    "password",
];

/// Builds a [`NewUser`] from a decoded JSON object.
///
/// Extra keys are ignored.
///
/// # Errors
///
/// Returns `ApiError::BadRequest` naming the first missing field, or the
/// first field whose value is not a JSON string.
pub fn new_user_from_json(body: &Map<String, Value>) -> Result<NewUser, ApiError> {
    if let Some(missing) = REQUIRED_USER_FIELDS
        .iter()
        .find(|field| !body.contains_key(**field))
    {
        return Err(ApiError::BadRequest(format!(
            "Missing required field: {missing}"
        )));
    }

    let field = |name: &str| -> Result<String, ApiError> {
        body.get(name)
            .and_then(Value::as_str)
            .map(ToString::to_string)
            .ok_or_else(|| ApiError::BadRequest(format!("Field '{name}' must be a string.")))
    };

    Ok(NewUser {
        firstname: field("firstname")?,
        lastname: field("lastname")?,
        email: field("email")?,
        mobile: field("mobile")?,
        username: field("username")?,
        password: field("password")?,
    })
}

/// Extracts a username/password pair.
///
/// # Errors
///
/// Returns `ApiError::BadRequest` unless both values are non-empty strings.
pub fn credentials_from_json(body: &Map<String, Value>) -> Result<Credentials, ApiError> {
    let non_empty = |name: &str| {
        body.get(name)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(ToString::to_string)
    };

    match (non_empty("username"), non_empty("password")) {
        (Some(username), Some(password)) => Ok(Credentials { username, password }),
        _ => Err(ApiError::BadRequest(
            "Both 'username' and 'password' are required.".to_string(),
        )),
    }
}

/// Length is counted in Unicode scalar values, not bytes.
///
/// # Errors
///
/// Returns `ApiError::BadRequest` when the password is shorter than `min_length`.
pub fn check_password_strength(password: &str, min_length: usize) -> Result<(), ApiError> {
    if password.chars().count() < min_length {
        return Err(ApiError::BadRequest(format!(
            "Password must be at least {min_length} characters long."
        )));
    }
    Ok(())
}
