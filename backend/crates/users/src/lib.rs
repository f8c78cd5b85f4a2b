//! Users Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases (register, login, profile CRUD)
//! - `infra/` - Postgres and in-memory repository implementations
//! - `presentation/` - HTTP handlers, DTOs, validation chains, router
//!
//! ## Features
//! - User registration and login with email + password
//! - Stateless bearer-token authentication (JWT, 30-day expiry)
//! - Profile retrieval, partial update, and deletion for the owner
//!
//! ## Security Model
//! - Passwords hashed once with Argon2id at registration
//! - Password hash never serialized to any client
//! - Login failures never reveal whether the email exists

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::UsersConfig;
pub use error::{UserError, UserResult};
pub use infra::memory::InMemoryUserRepository;
pub use infra::postgres::PgUserRepository;
pub use presentation::router::{users_router, users_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
