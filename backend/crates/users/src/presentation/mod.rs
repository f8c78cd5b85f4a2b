//! Presentation Layer
//!
//! HTTP handlers, DTOs, validation chains, router, and middleware.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod validation;

pub use extract::JsonBody;
pub use handlers::UsersAppState;
pub use middleware::{CurrentUser, require_auth};
pub use router::{users_router, users_router_generic};
