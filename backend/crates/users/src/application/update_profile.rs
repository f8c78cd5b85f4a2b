//! Update Profile Use Case
//!
//! Applies a partial update to the authenticated user's account.

use std::sync::Arc;

use kernel::id::UserId;

use crate::application::config::UsersConfig;
use crate::domain::entity::{ProfileOptionsUpdate, User, UserUpdate};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{Bio, Email, RawPassword, UserPassword, Username};
use crate::error::{UserError, UserResult};

/// Update profile input. A `None` leaves the current value in place.
#[derive(Debug, Default)]
pub struct UpdateProfileInput {
    pub username: Option<Username>,
    pub email: Option<Email>,
    pub password: Option<RawPassword>,
    pub first_name: Option<String>,
    pub family_name: Option<String>,
    pub bio: Option<Bio>,
    pub profile_picture_url: Option<String>,
    pub profile: Option<ProfileOptionsUpdate>,
}

/// Update profile use case
pub struct UpdateProfileUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<UsersConfig>,
}

impl<R> UpdateProfileUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<UsersConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, user_id: &UserId, input: UpdateProfileInput) -> UserResult<User> {
        let mut user = self
            .repo
            .find_by_id(user_id)
            .await?
            .ok_or(UserError::UserNotFound)?;

        // Uniqueness pre-checks, each only when the value actually changes
        if let Some(email) = input.email.as_ref().filter(|email| **email != user.email) {
            if let Some(existing) = self.repo.find_by_email(email).await? {
                if existing.user_id != user.user_id {
                    return Err(UserError::EmailTaken);
                }
            }
        }
        if let Some(username) = input
            .username
            .as_ref()
            .filter(|username| **username != user.username)
        {
            if let Some(existing) = self.repo.find_by_username(username).await? {
                if existing.user_id != user.user_id {
                    return Err(UserError::UsernameTaken);
                }
            }
        }

        // Re-hash only when the caller sent a new password
        let password = match input.password {
            Some(raw) => Some(
                UserPassword::from_raw(&raw, self.config.pepper())
                    .map_err(|e| UserError::Internal(e.to_string()))?,
            ),
            None => None,
        };

        user.apply(UserUpdate {
            username: input.username,
            email: input.email,
            password,
            first_name: input.first_name,
            family_name: input.family_name,
            bio: input.bio,
            profile_picture_url: input.profile_picture_url,
            profile: input.profile,
        });

        self.repo.update(&user).await?;

        tracing::info!(user_id = %user.user_id, "User profile updated");

        Ok(user)
    }
}
