//! Grant Credits Use Case
//!
//! Additive credit grant to the authenticated creator's own balance
//! (the purchase flow: payment completes client-side, then the
//! purchased credits are granted here). Spending happens only through
//! contest creation.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{credits::Credits, email::Email, user_role::UserRole};
use crate::domain::policy;
use crate::error::{IdentityError, IdentityResult};

/// Grant credits input
pub struct GrantCreditsInput {
    pub caller_email: String,
    pub credits: i64,
}

/// Grant credits use case
pub struct GrantCreditsUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> GrantCreditsUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: GrantCreditsInput) -> IdentityResult<User> {
        let email = Email::new(input.caller_email)?;
        let mut user = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(IdentityError::UserNotFound)?;

        policy::authorize(user.role, &[UserRole::Creator])?;

        if input.credits <= 0 {
            return Err(IdentityError::Validation(
                "Credit grant must be positive".to_string(),
            ));
        }

        let new_balance = self
            .repo
            .grant_credits(&user.user_id, input.credits)
            .await?;
        user.credits = Credits::from_db(new_balance);

        tracing::info!(
            user_id = %user.user_id,
            granted = input.credits,
            balance = new_balance,
            "Credits granted"
        );

        Ok(user)
    }
}
