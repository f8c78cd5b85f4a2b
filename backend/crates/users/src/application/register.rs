//! Register Use Case
//!
//! Creates a new user account and signs them in by issuing a token.

use std::sync::Arc;

use crate::application::config::UsersConfig;
use crate::domain::entity::{ProfileOptions, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{Bio, Email, RawPassword, UserPassword, Username};
use crate::error::{UserError, UserResult};

/// Register input. Fields are already validated value objects; the
/// request/field validation layer produced them.
#[derive(Debug)]
pub struct RegisterInput {
    pub username: Username,
    pub email: Email,
    pub password: RawPassword,
    pub first_name: String,
    pub family_name: String,
    pub bio: Option<Bio>,
    pub profile: ProfileOptions,
}

/// Register output
pub struct RegisterOutput {
    pub user: User,
    pub token: String,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<UsersConfig>,
}

impl<R> RegisterUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<UsersConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> UserResult<RegisterOutput> {
        // Uniqueness pre-check. The email conflict wins when both the
        // email and the username collide; the database unique indexes
        // remain the race-safe backstop.
        if let Some(existing) = self
            .repo
            .find_by_email_or_username(&input.email, &input.username)
            .await?
        {
            if existing.email == input.email {
                return Err(UserError::EmailTaken);
            }
            return Err(UserError::UsernameTaken);
        }

        // The one place a plaintext password becomes a stored hash
        let password = UserPassword::from_raw(&input.password, self.config.pepper())
            .map_err(|e| UserError::Internal(e.to_string()))?;

        let user = User::new(
            input.username,
            input.email,
            password,
            input.first_name,
            input.family_name,
            input.bio,
            input.profile,
        );

        self.repo.create(&user).await?;

        let token = self
            .config
            .token_service()
            .issue(&user.user_id.to_string())?;

        tracing::info!(
            user_id = %user.user_id,
            username = %user.username,
            "User registered"
        );

        Ok(RegisterOutput { user, token })
    }
}
