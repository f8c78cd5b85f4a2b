//! Proficiency Value Object

use serde::{Deserialize, Serialize};

/// Proficiency levels for a practicing language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Proficiency {
    Beginner,
    Elementary,
    Intermediate,
    #[serde(rename = "Upper Intermediate")]
    UpperIntermediate,
    Advanced,
    Native,
}

impl Proficiency {
    /// All levels, lowest to highest.
    pub const ALL: [Proficiency; 6] = [
        Proficiency::Beginner,
        Proficiency::Elementary,
        Proficiency::Intermediate,
        Proficiency::UpperIntermediate,
        Proficiency::Advanced,
        Proficiency::Native,
    ];

    /// Canonical display name (also the wire and storage form).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Proficiency::Beginner => "Beginner",
            Proficiency::Elementary => "Elementary",
            Proficiency::Intermediate => "Intermediate",
            Proficiency::UpperIntermediate => "Upper Intermediate",
            Proficiency::Advanced => "Advanced",
            Proficiency::Native => "Native",
        }
    }

    /// Parse the canonical name; `None` for anything outside the set.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == s)
    }
}

impl std::fmt::Display for Proficiency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
