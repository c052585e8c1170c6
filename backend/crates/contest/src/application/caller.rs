//! Caller Resolution
//!
//! Every identity-gated use case starts by resolving the authenticated
//! email claim to a stored user record, then checks roles on that record.

use identity::domain::value_object::email::Email;
use identity::{User, UserRepository};

use crate::error::{ContestError, ContestResult};

/// Resolve the caller's email claim to a user record
pub(crate) async fn resolve_caller<U>(users: &U, caller_email: &str) -> ContestResult<User>
where
    U: UserRepository,
{
    let email = Email::new(caller_email).map_err(ContestError::from)?;
    users
        .find_by_email(&email)
        .await
        .map_err(ContestError::from)?
        .ok_or(ContestError::UserNotFound)
}
