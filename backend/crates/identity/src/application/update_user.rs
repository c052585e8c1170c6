//! Update User Use Case
//!
//! Profile updates by the user themselves; role changes are the admin
//! moderation path.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_id::UserId, user_role::UserRole};
use crate::error::{IdentityError, IdentityResult};

/// Update user input
pub struct UpdateUserInput {
    /// Identity of the authenticated caller
    pub caller_email: String,
    /// The user being updated
    pub user_id: UserId,
    pub user_name: Option<String>,
    pub image_url: Option<String>,
    /// Role change; admin only
    pub role: Option<UserRole>,
}

/// Update user use case
pub struct UpdateUserUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: UpdateUserInput) -> IdentityResult<User> {
        let caller_email = Email::new(input.caller_email)?;
        let caller = self
            .repo
            .find_by_email(&caller_email)
            .await?
            .ok_or(IdentityError::UserNotFound)?;

        let mut target = self
            .repo
            .find_by_id(&input.user_id)
            .await?
            .ok_or(IdentityError::UserNotFound)?;

        let is_self = caller.user_id == target.user_id;
        if !is_self && !caller.role.is_admin() {
            return Err(IdentityError::AccessDenied);
        }

        if let Some(role) = input.role {
            if !caller.role.is_admin() {
                return Err(IdentityError::AccessDenied);
            }
            target.change_role(role);
        }

        target.update_profile(input.user_name, input.image_url);
        self.repo.update(&target).await?;

        tracing::info!(
            user_id = %target.user_id,
            role = %target.role,
            "User updated"
        );

        Ok(target)
    }
}
