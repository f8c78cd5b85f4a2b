//! Age Value Object

use kernel::error::app_error::{AppError, AppResult};
use kernel::rules;
use serde::{Deserialize, Serialize};

/// User age, bounded to [13, 120] inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Age(i32);

impl Age {
    /// Validate and wrap an age value.
    pub fn new(age: i32) -> AppResult<Self> {
        if !(rules::AGE_MIN..=rules::AGE_MAX).contains(&age) {
            return Err(AppError::bad_request(format!(
                "Age must be between {} and {}",
                rules::AGE_MIN,
                rules::AGE_MAX
            )));
        }
        Ok(Self(age))
    }

    pub const fn value(&self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for Age {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
