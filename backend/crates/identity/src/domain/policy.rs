//! Access Policy
//!
//! Role-based capability check consulted by every mutating use case:
//! the caller's resolved role must appear in the operation's
//! allow-list. Ownership checks (e.g. "is this the contest's own
//! creator") are layered on top by the individual use cases, never
//! replaced by role membership.

use thiserror::Error;

use crate::domain::value_object::user_role::UserRole;

/// Rejection returned when the caller's role is not in the allow-list
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Access Denied: Insufficient Permission")]
pub struct AccessDenied;

/// Permit the operation if `role` is in `allowed`
pub fn authorize(role: UserRole, allowed: &[UserRole]) -> Result<(), AccessDenied> {
    if allowed.contains(&role) {
        Ok(())
    } else {
        Err(AccessDenied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_in_allow_list() {
        assert_eq!(authorize(UserRole::Creator, &[UserRole::Creator]), Ok(()));
        assert_eq!(
            authorize(UserRole::Admin, &[UserRole::Creator, UserRole::Admin]),
            Ok(())
        );
    }

    #[test]
    fn test_role_not_in_allow_list() {
        assert_eq!(
            authorize(UserRole::User, &[UserRole::Creator]),
            Err(AccessDenied)
        );
        assert_eq!(authorize(UserRole::Creator, &[]), Err(AccessDenied));
    }

    #[test]
    fn test_admin_is_not_implicitly_allowed() {
        // Admin must be listed explicitly; there is no role hierarchy
        assert_eq!(
            authorize(UserRole::Admin, &[UserRole::User]),
            Err(AccessDenied)
        );
    }
}
