//! Delete Profile Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::repository::UserRepository;
use crate::error::{UserError, UserResult};

/// Delete profile use case
pub struct DeleteProfileUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteProfileUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Delete the authenticated user's account. Idempotent from the
    /// caller's view only in that a second call reports not-found.
    pub async fn execute(&self, user_id: &UserId) -> UserResult<()> {
        let deleted = self.repo.delete_by_id(user_id).await?;
        if !deleted {
            return Err(UserError::UserNotFound);
        }

        tracing::info!(user_id = %user_id, "User account deleted");
        Ok(())
    }
}
