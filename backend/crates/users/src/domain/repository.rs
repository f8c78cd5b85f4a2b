//! Repository Traits
//!
//! Interfaces for data persistence. Implementations live in the
//! infrastructure layer.

use kernel::id::UserId;

use crate::domain::entity::User;
use crate::domain::value_object::{Email, Username};
use crate::error::UserResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Persist a new user. Fails with the conflict variants if the
    /// email or username is already taken.
    async fn create(&self, user: &User) -> UserResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> UserResult<Option<User>>;

    /// Find user by email (email is stored lowercased)
    async fn find_by_email(&self, email: &Email) -> UserResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &Username) -> UserResult<Option<User>>;

    /// Find a user matching either the email or the username. Used for
    /// the registration uniqueness pre-check.
    async fn find_by_email_or_username(
        &self,
        email: &Email,
        username: &Username,
    ) -> UserResult<Option<User>>;

    /// Update an existing user
    async fn update(&self, user: &User) -> UserResult<()>;

    /// Delete a user. Returns whether a row was actually removed.
    async fn delete_by_id(&self, user_id: &UserId) -> UserResult<bool>;
}
