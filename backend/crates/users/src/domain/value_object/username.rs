//! Username Value Object

use kernel::error::app_error::{AppError, AppResult};
use kernel::rules;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Username: 3-30 characters, letters, digits, and underscores.
///
/// Case is preserved for display; uniqueness is enforced by the store
/// on the exact string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Username(String);

impl Username {
    /// Validate and wrap a username. Leading/trailing whitespace is
    /// trimmed before validation.
    pub fn new(username: impl Into<String>) -> AppResult<Self> {
        let username = username.into().trim().to_string();

        if username.is_empty() {
            return Err(AppError::bad_request("Username is required"));
        }

        let len = username.chars().count();
        if len < rules::USERNAME_MIN_LEN || len > rules::USERNAME_MAX_LEN {
            return Err(AppError::bad_request(format!(
                "Username must be between {} and {} characters",
                rules::USERNAME_MIN_LEN,
                rules::USERNAME_MAX_LEN
            )));
        }

        if !rules::is_valid_username(&username) {
            return Err(AppError::bad_request(
                "Username can only contain letters, numbers, and underscores",
            ));
        }

        Ok(Self(username))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(username: impl Into<String>) -> Self {
        Self(username.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Username {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Username::new(s)
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
