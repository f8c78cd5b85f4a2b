//! Users Router

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::UsersConfig;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, UsersAppState};
use crate::presentation::middleware::require_auth;

/// Create the users router with the PostgreSQL repository
pub fn users_router(repo: PgUserRepository, config: UsersConfig) -> Router {
    users_router_generic(repo, config)
}

/// Create a users router for any repository implementation
pub fn users_router_generic<R>(repo: R, config: UsersConfig) -> Router
where
    R: UserRepository + Send + Sync + 'static,
{
    let config = Arc::new(config);
    let state = UsersAppState {
        repo: Arc::new(repo),
        config: config.clone(),
    };

    let protected = Router::new()
        .route(
            "/profile",
            get(handlers::get_profile::<R>)
                .put(handlers::update_profile::<R>)
                .delete(handlers::delete_profile::<R>),
        )
        .layer(middleware::from_fn_with_state(config, require_auth));

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .merge(protected)
        .with_state(state)
}
