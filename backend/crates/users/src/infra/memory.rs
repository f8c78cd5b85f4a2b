//! In-Memory Repository Implementation
//!
//! Backs the generic router in tests and local experiments. Uniqueness
//! checks and writes happen under a single write lock, so the conflict
//! semantics match the database-backed repository.

use std::collections::HashMap;
use std::sync::RwLock;

use kernel::id::UserId;
use uuid::Uuid;

use crate::domain::entity::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{Email, Username};
use crate::error::{UserError, UserResult};

/// In-memory user repository
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_poisoned() -> UserError {
        UserError::Internal("User store lock poisoned".to_string())
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> UserResult<()> {
        let mut users = self.users.write().map_err(|_| Self::lock_poisoned())?;

        if users.values().any(|u| u.email == user.email) {
            return Err(UserError::EmailTaken);
        }
        if users.values().any(|u| u.username == user.username) {
            return Err(UserError::UsernameTaken);
        }

        users.insert(user.user_id.into_uuid(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> UserResult<Option<User>> {
        let users = self.users.read().map_err(|_| Self::lock_poisoned())?;
        Ok(users.get(user_id.as_uuid()).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> UserResult<Option<User>> {
        let users = self.users.read().map_err(|_| Self::lock_poisoned())?;
        Ok(users.values().find(|u| u.email == *email).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> UserResult<Option<User>> {
        let users = self.users.read().map_err(|_| Self::lock_poisoned())?;
        Ok(users.values().find(|u| u.username == *username).cloned())
    }

    async fn find_by_email_or_username(
        &self,
        email: &Email,
        username: &Username,
    ) -> UserResult<Option<User>> {
        let users = self.users.read().map_err(|_| Self::lock_poisoned())?;

        // Email match wins when both collide on different rows
        if let Some(user) = users.values().find(|u| u.email == *email) {
            return Ok(Some(user.clone()));
        }
        Ok(users.values().find(|u| u.username == *username).cloned())
    }

    async fn update(&self, user: &User) -> UserResult<()> {
        let mut users = self.users.write().map_err(|_| Self::lock_poisoned())?;

        if users
            .values()
            .any(|u| u.user_id != user.user_id && u.email == user.email)
        {
            return Err(UserError::EmailTaken);
        }
        if users
            .values()
            .any(|u| u.user_id != user.user_id && u.username == user.username)
        {
            return Err(UserError::UsernameTaken);
        }

        match users.get_mut(user.user_id.as_uuid()) {
            Some(slot) => {
                *slot = user.clone();
                Ok(())
            }
            None => Err(UserError::UserNotFound),
        }
    }

    async fn delete_by_id(&self, user_id: &UserId) -> UserResult<bool> {
        let mut users = self.users.write().map_err(|_| Self::lock_poisoned())?;
        Ok(users.remove(user_id.as_uuid()).is_some())
    }
}
