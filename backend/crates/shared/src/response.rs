//! API Response Envelope
//!
//! Every endpoint, success or failure, responds with the same shape:
//! `{ success, message, data?, errors? }`. Keeping the envelope in the
//! kernel means handlers and error conversions cannot drift apart.

use serde::Serialize;

use crate::rules::FieldError;

/// The uniform response body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl<T> ApiResponse<T> {
    /// Success with a payload.
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            errors: None,
        }
    }

    /// Failure with a message only.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            errors: None,
        }
    }

    /// Failure carrying field-level validation errors.
    pub fn validation_failure(errors: Vec<FieldError>) -> Self {
        Self {
            success: false,
            message: "Validation failed".to_string(),
            data: None,
            errors: Some(errors),
        }
    }
}

impl ApiResponse<()> {
    /// Success without a payload (e.g. after a delete).
    pub fn success_empty(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
            errors: None,
        }
    }
}
