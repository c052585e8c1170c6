//! Credits Value Object
//!
//! Integer credit balance. Never negative; the contest store enforces
//! this again at the database level with a CHECK constraint, so the
//! invariant holds even under racing debits.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Credit balance of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Credits(i64);

impl Credits {
    /// Create a balance; negative values are rejected
    pub fn new(amount: i64) -> AppResult<Self> {
        if amount < 0 {
            return Err(AppError::bad_request("Credits cannot be negative"));
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

    /// Whether the balance covers the given cost
    #[inline]
    pub fn can_afford(&self, cost: i64) -> bool {
        self.0 >= cost
    }

    /// Additive grant
    pub fn granted(self, amount: i64) -> AppResult<Self> {
        if amount <= 0 {
            return Err(AppError::bad_request("Credit grant must be positive"));
        }
        Ok(Self(self.0 + amount))
    }
}

impl std::fmt::Display for Credits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_negative() {
        assert!(Credits::new(-1).is_err());
        assert_eq!(Credits::new(0).unwrap().amount(), 0);
        assert_eq!(Credits::new(50).unwrap().amount(), 50);
    }

    #[test]
    fn test_can_afford() {
        let credits = Credits::new(50).unwrap();
        assert!(credits.can_afford(50));
        assert!(credits.can_afford(10));
        assert!(!credits.can_afford(51));
    }

    #[test]
    fn test_granted() {
        let credits = Credits::new(10).unwrap();
        assert_eq!(credits.granted(40).unwrap().amount(), 50);
        assert!(credits.granted(0).is_err());
        assert!(credits.granted(-5).is_err());
    }
}
