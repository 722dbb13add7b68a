//! Validation helpers for `userbook`.
//!
//! These routines enforce the user record constraints and return
//! structured errors without touching storage. Every insert and update
//! runs them first.

use crate::error::{Result, UserbookError};

/// Inclusive bounds for the `Age` column.
pub const MIN_AGE: i64 = 0;
pub const MAX_AGE: i64 = 150;

/// Maximum length of the `Name` column, in characters.
pub const MAX_NAME_CHARS: usize = 100;

/// Validates user fields.
pub struct UserValidator;

impl UserValidator {
    /// Validate a name/age pair. Age is checked first.
    ///
    /// # Errors
    ///
    /// Returns `UserbookError::InvalidArgument` if age is outside
    /// `MIN_AGE..=MAX_AGE`, or if name is empty or longer than
    /// `MAX_NAME_CHARS` characters.
    pub fn validate(name: &str, age: i64) -> Result<()> {
        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            return Err(UserbookError::invalid_argument("age", "age out of range"));
        }

        if name.is_empty() || name.chars().count() > MAX_NAME_CHARS {
            return Err(UserbookError::invalid_argument(
                "name",
                "name length invalid",
            ));
        }

        Ok(())
    }
}
