//! User Password Value Objects
//!
//! [`RawPassword`] is a validated plaintext attempt that only exists in
//! memory. [`UserPassword`] is the stored hash. Hashing happens exactly
//! once, in [`UserPassword::from_raw`] - the only path from one type to
//! the other - so a stored hash can never be hashed again by accident.

use platform::password::{
    ClearTextPassword, HashedPassword, PasswordHashError, PasswordPolicyError,
};

/// A validated plaintext password. Zeroized on drop, redacted in Debug.
#[derive(Debug)]
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Validate length and character policy.
    pub fn new(raw: impl Into<String>) -> Result<Self, PasswordPolicyError> {
        ClearTextPassword::new(raw.into()).map(Self)
    }

    fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

/// The stored password hash (PHC string form). Write-only from the
/// API's perspective: never serialized to clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Hash a raw password. The single hashing trigger point.
    pub fn from_raw(raw: &RawPassword, pepper: Option<&[u8]>) -> Result<Self, PasswordHashError> {
        raw.inner().hash(pepper).map(Self)
    }

    /// Wrap a hash loaded from storage.
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        HashedPassword::from_phc_string(s).map(Self)
    }

    /// Verify a plaintext attempt. Malformed hashes verify false.
    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(raw.inner(), pepper)
    }

    /// PHC string for storage.
    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }
}
