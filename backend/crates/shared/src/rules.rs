//! Validation Rules - single source of truth for payload constraints
//!
//! The same limits apply to every surface (HTTP validation chains,
//! domain value objects, database CHECK constraints). Earlier revisions
//! of this product kept divergent copies of these numbers in frontend
//! and backend code; they live here exactly once now.

use serde::Serialize;
use serde_json::Value;

/// Username: 3-30 characters, letters/digits/underscore only.
pub const USERNAME_MIN_LEN: usize = 3;
pub const USERNAME_MAX_LEN: usize = 30;

/// Password: length limits only; strength policy is out of scope.
pub const PASSWORD_MIN_LEN: usize = 6;
pub const PASSWORD_MAX_LEN: usize = 128;

/// Bio is optional, capped at 250 characters.
pub const BIO_MAX_LEN: usize = 250;

/// Age bounds, inclusive on both ends.
pub const AGE_MIN: i32 = 13;
pub const AGE_MAX: i32 = 120;

/// Check the username character set and length in one place.
pub fn is_valid_username(s: &str) -> bool {
    let len = s.chars().count();
    (USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&len)
        && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Uniform field-level validation error descriptor.
///
/// Serialized as `{ "field": ..., "message": ..., "rejectedValue": ... }`
/// inside the response envelope's `errors` array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    /// Dotted path of the offending field, e.g. `profileOptions.age`
    pub field: String,
    /// Human-readable message
    pub message: String,
    /// The value that was rejected, if it is safe to echo back
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected_value: Option<Value>,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rejected_value: None,
        }
    }

    /// Attach the rejected value. Never used for passwords.
    pub fn with_rejected(mut self, value: impl Into<Value>) -> Self {
        self.rejected_value = Some(value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_rule() {
        assert!(is_valid_username("abc"));
        assert!(is_valid_username("alice_99"));
        assert!(is_valid_username(&"a".repeat(30)));

        assert!(!is_valid_username("ab"));
        assert!(!is_valid_username(&"a".repeat(31)));
        assert!(!is_valid_username("has space"));
        assert!(!is_valid_username("dash-ed"));
        assert!(!is_valid_username(""));
    }

    #[test]
    fn test_field_error_serialization() {
        let err = FieldError::new("profileOptions.age", "Age must be between 13 and 120")
            .with_rejected(7);
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["field"], "profileOptions.age");
        assert_eq!(json["rejectedValue"], 7);

        // rejectedValue is omitted entirely when absent
        let err = FieldError::new("password", "Password is required");
        let json = serde_json::to_value(&err).unwrap();
        assert!(json.get("rejectedValue").is_none());
    }
}
