//! Domain Layer
//!
//! Entities, value objects, and repository traits. No HTTP, no SQL.

pub mod entity;
pub mod repository;
pub mod value_object;
