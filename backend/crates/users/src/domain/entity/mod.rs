//! Entities

pub mod user;

pub use user::{PracticingLanguage, ProfileOptions, ProfileOptionsUpdate, User, UserUpdate};
