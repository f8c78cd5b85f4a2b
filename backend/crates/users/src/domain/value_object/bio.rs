//! Bio Value Object

use kernel::error::app_error::{AppError, AppResult};
use kernel::rules;
use serde::{Deserialize, Serialize};

/// Free-text bio, at most 250 characters. Optional on the user; an
/// absent bio is `Option::<Bio>::None`, never an empty `Bio`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bio(String);

impl Bio {
    /// Validate and wrap a bio.
    pub fn new(bio: impl Into<String>) -> AppResult<Self> {
        let bio = bio.into();

        if bio.chars().count() > rules::BIO_MAX_LEN {
            return Err(AppError::bad_request(format!(
                "Bio cannot exceed {} characters",
                rules::BIO_MAX_LEN
            )));
        }

        Ok(Self(bio))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(bio: impl Into<String>) -> Self {
        Self(bio.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Bio {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_limit() {
        assert!(Bio::new("hi").is_ok());
        assert!(Bio::new("b".repeat(250)).is_ok());
        assert!(Bio::new("b".repeat(251)).is_err());
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        // 250 multibyte characters are still within the limit
        assert!(Bio::new("あ".repeat(250)).is_ok());
        assert!(Bio::new("あ".repeat(251)).is_err());
    }
}
