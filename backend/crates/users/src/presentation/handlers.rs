//! HTTP Handlers
//!
//! Thin adapters: validate the body, run the use case, wrap the result
//! in the response envelope. All domain decisions live below this layer.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;

use kernel::response::ApiResponse;

use crate::application::{
    DeleteProfileUseCase, GetProfileUseCase, LoginUseCase, RegisterUseCase, UpdateProfileUseCase,
    UsersConfig,
};
use crate::domain::repository::UserRepository;
use crate::error::{UserError, UserResult};
use crate::presentation::dto::{
    AuthData, LoginRequest, PublicUser, RegisterRequest, UpdateRequest,
};
use crate::presentation::extract::JsonBody;
use crate::presentation::middleware::CurrentUser;
use crate::presentation::validation::{validate_login, validate_registration, validate_update};

/// Shared state for user handlers
pub struct UsersAppState<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<UsersConfig>,
}

// Manual impl: the state is two Arcs, cloneable whether or not the
// repository type itself is.
impl<R> Clone for UsersAppState<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            config: self.config.clone(),
        }
    }
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/users/register
pub async fn register<R>(
    State(state): State<UsersAppState<R>>,
    JsonBody(req): JsonBody<RegisterRequest>,
) -> UserResult<impl IntoResponse>
where
    R: UserRepository + Send + Sync + 'static,
{
    let input = validate_registration(req).map_err(UserError::Validation)?;

    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());
    let output = use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "User registered successfully!",
            AuthData {
                user: PublicUser::from(&output.user),
                token: output.token,
            },
        )),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/users/login
pub async fn login<R>(
    State(state): State<UsersAppState<R>>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> UserResult<impl IntoResponse>
where
    R: UserRepository + Send + Sync + 'static,
{
    let input = validate_login(req).map_err(UserError::Validation)?;

    let use_case = LoginUseCase::new(state.repo.clone(), state.config.clone());
    let output = use_case.execute(input).await?;

    Ok(Json(ApiResponse::success(
        "Login successful!",
        AuthData {
            user: PublicUser::from(&output.user),
            token: output.token,
        },
    )))
}

// ============================================================================
// Profile
// ============================================================================

/// GET /api/users/profile
pub async fn get_profile<R>(
    State(state): State<UsersAppState<R>>,
    CurrentUser(user_id): CurrentUser,
) -> UserResult<impl IntoResponse>
where
    R: UserRepository + Send + Sync + 'static,
{
    let use_case = GetProfileUseCase::new(state.repo.clone());
    let user = use_case.execute(&user_id).await?;

    Ok(Json(ApiResponse::success(
        "User profile fetched successfully!",
        PublicUser::from(&user),
    )))
}

/// PUT /api/users/profile
pub async fn update_profile<R>(
    State(state): State<UsersAppState<R>>,
    CurrentUser(user_id): CurrentUser,
    JsonBody(req): JsonBody<UpdateRequest>,
) -> UserResult<impl IntoResponse>
where
    R: UserRepository + Send + Sync + 'static,
{
    let input = validate_update(req).map_err(UserError::Validation)?;

    let use_case = UpdateProfileUseCase::new(state.repo.clone(), state.config.clone());
    let user = use_case.execute(&user_id, input).await?;

    Ok(Json(ApiResponse::success(
        "User profile updated successfully!",
        PublicUser::from(&user),
    )))
}

/// DELETE /api/users/profile
pub async fn delete_profile<R>(
    State(state): State<UsersAppState<R>>,
    CurrentUser(user_id): CurrentUser,
) -> UserResult<impl IntoResponse>
where
    R: UserRepository + Send + Sync + 'static,
{
    let use_case = DeleteProfileUseCase::new(state.repo.clone());
    use_case.execute(&user_id).await?;

    Ok(Json(ApiResponse::success_empty(
        "User profile deleted successfully.",
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::InMemoryUserRepository;

    #[test]
    fn test_state_clones_without_clonable_repo() {
        // InMemoryUserRepository holds a lock and is not Clone; the
        // state must clone anyway through its Arcs.
        let state = UsersAppState {
            repo: Arc::new(InMemoryUserRepository::new()),
            config: Arc::new(UsersConfig::development()),
        };
        let copy = state.clone();
        assert!(Arc::ptr_eq(&state.repo, &copy.repo));
        assert!(Arc::ptr_eq(&state.config, &copy.config));
    }
}
