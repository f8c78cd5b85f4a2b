//! Bearer Token Issuing and Verification
//!
//! Stateless authentication tokens (JWT, HS256). A token asserts "this
//! request was made by user X" via the `id` claim; there is no
//! server-side session record to consult or clean up.
//!
//! The signing key is injected by the caller. Constructing a
//! [`TokenService`] without a key is impossible by design; a missing key
//! is a startup failure, never a silently unsigned token.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Token lifetime: 30 days from issuance.
pub const TOKEN_TTL_SECS: i64 = 30 * 24 * 60 * 60;

/// Claims carried by every issued token.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User identifier (canonical string form)
    pub id: String,
    /// Issued-at (Unix seconds)
    pub iat: i64,
    /// Expiry (Unix seconds)
    pub exp: i64,
}

/// Token failures. `Expired` and `Invalid` are kept distinct for
/// diagnostics even though callers map both to the same 401.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("No token provided")]
    Missing,

    #[error("Invalid token")]
    Invalid,

    #[error("Token has expired")]
    Expired,
}

/// Issues and verifies signed bearer tokens.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: i64,
}

impl TokenService {
    /// Create a service from the signing secret.
    pub fn new(secret: &[u8]) -> Self {
        Self::with_ttl(secret, TOKEN_TTL_SECS)
    }

    /// Create a service with an explicit token lifetime in seconds.
    pub fn with_ttl(secret: &[u8], ttl_secs: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl_secs,
        }
    }

    /// Issue a signed token for the given user id.
    pub fn issue(&self, user_id: &str) -> Result<String, TokenError> {
        self.issue_at(user_id, Utc::now().timestamp())
    }

    fn issue_at(&self, user_id: &str, now: i64) -> Result<String, TokenError> {
        let claims = Claims {
            id: user_id.to_string(),
            iat: now,
            exp: now + self.ttl_secs,
        };

        encode(&Header::default(), &claims, &self.encoding).map_err(|_| TokenError::Invalid)
    }

    /// Verify signature, structure, and expiry; return the claims.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })
    }
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("ttl_secs", &self.ttl_secs)
            .finish_non_exhaustive()
    }
}

/// Extract the raw token from an `Authorization` header value.
///
/// The scheme prefix is exactly `Bearer ` - case-sensitive, one space.
/// Anything else counts as "no token provided".
pub fn extract_bearer(header_value: Option<&str>) -> Result<&str, TokenError> {
    let value = header_value.ok_or(TokenError::Missing)?;
    let token = value.strip_prefix("Bearer ").ok_or(TokenError::Missing)?;
    if token.is_empty() {
        return Err(TokenError::Missing);
    }
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new(b"test-signing-secret")
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let svc = service();
        let token = svc.issue("7c9e6679-7425-40de-944b-e07fc1f90ae7").unwrap();
        assert!(!token.is_empty());

        let claims = svc.verify(&token).unwrap();
        assert_eq!(claims.id, "7c9e6679-7425-40de-944b-e07fc1f90ae7");
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECS);
    }

    #[test]
    fn test_tampered_signature_rejected() {
        let svc = service();
        let token = svc.issue("user-1").unwrap();

        let mut tampered = token.clone();
        tampered.pop();
        tampered.push(if token.ends_with('A') { 'B' } else { 'A' });

        assert_eq!(svc.verify(&tampered), Err(TokenError::Invalid));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = service().issue("user-1").unwrap();
        let other = TokenService::new(b"different-secret");
        assert_eq!(other.verify(&token), Err(TokenError::Invalid));
    }

    #[test]
    fn test_expired_token_rejected_distinctly() {
        let svc = service();
        // Issued an hour in the past with a zero lifetime
        let token = TokenService::with_ttl(b"test-signing-secret", 0)
            .issue_at("user-1", Utc::now().timestamp() - 3600)
            .unwrap();

        assert_eq!(svc.verify(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert_eq!(service().verify("not.a.jwt"), Err(TokenError::Invalid));
        assert_eq!(service().verify(""), Err(TokenError::Invalid));
    }

    #[test]
    fn test_extract_bearer() {
        assert_eq!(extract_bearer(Some("Bearer abc.def.ghi")), Ok("abc.def.ghi"));

        // Exact scheme required
        assert_eq!(extract_bearer(Some("bearer abc")), Err(TokenError::Missing));
        assert_eq!(extract_bearer(Some("BEARER abc")), Err(TokenError::Missing));
        assert_eq!(extract_bearer(Some("Bearer")), Err(TokenError::Missing));
        assert_eq!(extract_bearer(Some("Bearer ")), Err(TokenError::Missing));
        assert_eq!(extract_bearer(Some("Token abc")), Err(TokenError::Missing));
        assert_eq!(extract_bearer(None), Err(TokenError::Missing));
    }

    #[test]
    fn test_extract_bearer_keeps_extra_spaces_in_token() {
        // One space separates scheme and token; the rest is the token
        // itself and will fail verification downstream.
        assert_eq!(extract_bearer(Some("Bearer  abc")), Ok(" abc"));
    }
}
