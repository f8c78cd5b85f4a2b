//! Login Use Case
//!
//! Verifies credentials and issues a token. Unknown email and wrong
//! password are indistinguishable from the outside.

use std::sync::Arc;

use crate::application::config::UsersConfig;
use crate::domain::entity::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{Email, RawPassword};
use crate::error::{UserError, UserResult};

/// Login input. The password stays a raw string here: an attempt that
/// cannot even satisfy the password policy is just a failed login, not
/// a validation error worth describing.
#[derive(Debug)]
pub struct LoginInput {
    pub email: Email,
    pub password: String,
}

/// Login output
pub struct LoginOutput {
    pub user: User,
    pub token: String,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<UsersConfig>,
}

impl<R> LoginUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<UsersConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: LoginInput) -> UserResult<LoginOutput> {
        let Some(mut user) = self.repo.find_by_email(&input.email).await? else {
            return Err(UserError::InvalidCredentials);
        };

        let Ok(attempt) = RawPassword::new(input.password) else {
            return Err(UserError::InvalidCredentials);
        };

        if !user.password.verify(&attempt, self.config.pepper()) {
            return Err(UserError::InvalidCredentials);
        }

        user.record_login();
        self.repo.update(&user).await?;

        let token = self
            .config
            .token_service()
            .issue(&user.user_id.to_string())?;

        tracing::info!(
            user_id = %user.user_id,
            username = %user.username,
            "User logged in"
        );

        Ok(LoginOutput { user, token })
    }
}
