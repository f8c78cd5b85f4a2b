//! Value Objects
//!
//! Parsing constructors are the enum/range enforcement layer: once a
//! value exists, it is within its constraints.

pub mod age;
pub mod bio;
pub mod country;
pub mod email;
pub mod gender;
pub mod language;
pub mod proficiency;
pub mod user_password;
pub mod username;

pub use age::Age;
pub use bio::Bio;
pub use country::Country;
pub use email::Email;
pub use gender::Gender;
pub use language::Language;
pub use proficiency::Proficiency;
pub use user_password::{RawPassword, UserPassword};
pub use username::Username;
