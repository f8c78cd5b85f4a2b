//! Get Profile Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::User;
use crate::domain::repository::UserRepository;
use crate::error::{UserError, UserResult};

/// Get profile use case
pub struct GetProfileUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> GetProfileUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Fetch the user for an already-authenticated id. The account may
    /// have been deleted since the token was issued.
    pub async fn execute(&self, user_id: &UserId) -> UserResult<User> {
        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or(UserError::UserNotFound)
    }
}
