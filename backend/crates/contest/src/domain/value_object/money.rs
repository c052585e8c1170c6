//! Money Value Object
//!
//! Whole-unit amount used for prize money and entry fees. Both must be
//! at least 1; the store repeats the check as a CHECK constraint.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Positive monetary amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Create an amount; anything below 1 is rejected
    pub fn new(amount: i64) -> AppResult<Self> {
        if amount < 1 {
            return Err(AppError::bad_request("Amount must be at least 1"));
        }
        Ok(Self(amount))
    }

    /// Create from a database value (constraint-checked at the store)
    pub fn from_db(amount: i64) -> Self {
        Self(amount)
    }

    #[inline]
    pub fn amount(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
