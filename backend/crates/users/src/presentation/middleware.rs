//! Bearer Auth Middleware
//!
//! Verifies the `Authorization: Bearer <token>` header on protected
//! routes and injects the caller's id for the handlers. The token alone
//! authenticates; no database lookup happens here, so a deleted account
//! surfaces as 404 in the handler rather than 401 at the gate.

use axum::body::Body;
use axum::extract::{FromRequestParts, State};
use axum::http::{Request, header, request::Parts};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use kernel::id::UserId;
use platform::token::extract_bearer;

use crate::application::config::UsersConfig;
use crate::error::UserError;

/// The authenticated caller's id, inserted by [`require_auth`].
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser(pub UserId);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = UserError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .copied()
            .ok_or(UserError::MissingToken)
    }
}

/// Middleware that requires a valid bearer token
pub async fn require_auth(
    State(config): State<Arc<UsersConfig>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let header_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    let claims = extract_bearer(header_value)
        .and_then(|token| config.token_service().verify(token))
        .map_err(|e| UserError::from(e).into_response())?;

    let user_id = UserId::parse(&claims.id)
        .map_err(|_| UserError::InvalidToken.into_response())?;

    req.extensions_mut().insert(CurrentUser(user_id));

    Ok(next.run(req).await)
}
