//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations with no domain knowledge:
//! - Password hashing (Argon2id, random salt, zeroized plaintext)
//! - Bearer token issuing and verification (JWT)

pub mod password;
pub mod token;
