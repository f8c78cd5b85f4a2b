//! Application Configuration
//!
//! Configuration for the users application layer.

use platform::token::{TOKEN_TTL_SECS, TokenService};

use crate::error::{UserError, UserResult};

/// Users application configuration
#[derive(Clone)]
pub struct UsersConfig {
    /// HMAC secret for signing bearer tokens
    jwt_secret: Vec<u8>,
    /// Token lifetime in seconds
    pub token_ttl_secs: i64,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl UsersConfig {
    /// Create a config. An empty signing secret is refused so the
    /// service cannot start issuing trivially forgeable tokens.
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> UserResult<Self> {
        let jwt_secret = jwt_secret.into();
        if jwt_secret.is_empty() {
            return Err(UserError::Internal(
                "JWT secret must not be empty".to_string(),
            ));
        }

        Ok(Self {
            jwt_secret,
            token_ttl_secs: TOKEN_TTL_SECS,
            password_pepper: None,
        })
    }

    /// Create config with a random secret (for development and tests)
    pub fn development() -> Self {
        use rand::RngCore;
        let mut secret = vec![0u8; 32];
        rand::rngs::OsRng.fill_bytes(&mut secret);
        Self {
            jwt_secret: secret,
            token_ttl_secs: TOKEN_TTL_SECS,
            password_pepper: None,
        }
    }

    /// Set the password pepper
    pub fn with_pepper(mut self, pepper: impl Into<Vec<u8>>) -> Self {
        self.password_pepper = Some(pepper.into());
        self
    }

    /// Build the token service for this config
    pub fn token_service(&self) -> TokenService {
        TokenService::with_ttl(&self.jwt_secret, self.token_ttl_secs)
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

impl std::fmt::Debug for UsersConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UsersConfig")
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl_secs", &self.token_ttl_secs)
            .field(
                "password_pepper",
                &self.password_pepper.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_secret_refused() {
        assert!(UsersConfig::new(Vec::new()).is_err());
        assert!(UsersConfig::new(b"secret".to_vec()).is_ok());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = UsersConfig::new(b"super-secret".to_vec())
            .unwrap()
            .with_pepper(b"pepper".to_vec());
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(!rendered.contains("pepper\""));
        assert!(rendered.contains("<redacted>"));
    }
}
