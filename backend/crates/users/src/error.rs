//! User Error Types
//!
//! Domain-specific error variants that integrate with the unified
//! `kernel::error::AppError` system and render the standard response
//! envelope.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::response::ApiResponse;
use kernel::rules::FieldError;
use platform::token::TokenError;
use thiserror::Error;

/// User-domain result type alias
pub type UserResult<T> = Result<T, UserError>;

/// User-domain error variants
#[derive(Debug, Error)]
pub enum UserError {
    /// One or more request fields failed validation
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    /// Request body could not be parsed as the expected JSON shape
    #[error("{0}")]
    InvalidBody(String),

    /// Email is already registered
    #[error("User with that email already exists.")]
    EmailTaken,

    /// Username is already registered
    #[error("Username is already taken.")]
    UsernameTaken,

    /// Wrong password or unknown email - deliberately one message
    #[error("Invalid email or password.")]
    InvalidCredentials,

    /// No bearer token on a protected route
    #[error("No token provided")]
    MissingToken,

    /// Token failed signature or structural checks
    #[error("Invalid token")]
    InvalidToken,

    /// Token was valid once but is past its expiry
    #[error("Invalid token")]
    ExpiredToken,

    /// User record does not exist
    #[error("User not found.")]
    UserNotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl UserError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            UserError::Validation(_)
            | UserError::InvalidBody(_)
            | UserError::EmailTaken
            | UserError::UsernameTaken => StatusCode::BAD_REQUEST,
            UserError::InvalidCredentials
            | UserError::MissingToken
            | UserError::InvalidToken
            | UserError::ExpiredToken => StatusCode::UNAUTHORIZED,
            UserError::UserNotFound => StatusCode::NOT_FOUND,
            UserError::Database(_) | UserError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            UserError::Validation(_)
            | UserError::InvalidBody(_)
            | UserError::EmailTaken
            | UserError::UsernameTaken => ErrorKind::BadRequest,
            UserError::InvalidCredentials
            | UserError::MissingToken
            | UserError::InvalidToken
            | UserError::ExpiredToken => ErrorKind::Unauthorized,
            UserError::UserNotFound => ErrorKind::NotFound,
            UserError::Database(_) | UserError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError (drops field-level detail; use only where the
    /// envelope is rendered elsewhere)
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.client_message())
    }

    /// The message the client is allowed to see. Server-side failures
    /// collapse to a generic line; details stay in the logs.
    fn client_message(&self) -> String {
        match self {
            UserError::Database(_) | UserError::Internal(_) => {
                "An unexpected error occurred.".to_string()
            }
            other => other.to_string(),
        }
    }

    /// Log the error with the appropriate level
    fn log(&self) {
        match self {
            UserError::Database(e) => {
                tracing::error!(error = %e, "User database error");
            }
            UserError::Internal(msg) => {
                tracing::error!(message = %msg, "User internal error");
            }
            UserError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            UserError::ExpiredToken => {
                tracing::debug!("Rejected expired token");
            }
            _ => {
                tracing::debug!(error = %self, "User error");
            }
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        self.log();

        let status = self.status_code();
        let body = match self {
            UserError::Validation(errors) => ApiResponse::<()>::validation_failure(errors),
            other => ApiResponse::<()>::failure(other.client_message()),
        };

        (status, Json(body)).into_response()
    }
}

impl From<AppError> for UserError {
    fn from(err: AppError) -> Self {
        UserError::Internal(err.to_string())
    }
}

impl From<TokenError> for UserError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Missing => UserError::MissingToken,
            TokenError::Invalid => UserError::InvalidToken,
            TokenError::Expired => UserError::ExpiredToken,
        }
    }
}
