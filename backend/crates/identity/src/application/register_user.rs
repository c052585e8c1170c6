//! Register User Use Case
//!
//! Creates a user record on first sign-in. Idempotent: registering an
//! email that already exists returns the stored record unchanged.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{IdentityError, IdentityResult};

/// Register user input
pub struct RegisterUserInput {
    pub email: String,
    pub user_name: String,
    pub image_url: String,
}

/// Register user use case
pub struct RegisterUserUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> RegisterUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: RegisterUserInput) -> IdentityResult<User> {
        let email = Email::new(input.email)?;

        if let Some(existing) = self.repo.find_by_email(&email).await? {
            tracing::debug!(email = %email, "Registration for existing user, returning record");
            return Ok(existing);
        }

        let user_name = input.user_name.trim();
        if user_name.is_empty() {
            return Err(IdentityError::Validation("Name is required".to_string()));
        }

        let user = User::new(user_name, email, input.image_url);

        // Insert is conditional on the email being free, so a racing
        // duplicate registration degrades to the idempotent path
        let inserted = self.repo.create(&user).await?;
        if !inserted {
            return self
                .repo
                .find_by_email(&user.email)
                .await?
                .ok_or_else(|| IdentityError::Internal("User vanished after insert race".into()));
        }

        tracing::info!(
            user_id = %user.user_id,
            email = %user.email,
            "User registered"
        );

        Ok(user)
    }
}
