//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod delete_profile;
pub mod get_profile;
pub mod login;
pub mod register;
pub mod update_profile;

// Re-exports
pub use config::UsersConfig;
pub use delete_profile::DeleteProfileUseCase;
pub use get_profile::GetProfileUseCase;
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
pub use update_profile::{UpdateProfileInput, UpdateProfileUseCase};
