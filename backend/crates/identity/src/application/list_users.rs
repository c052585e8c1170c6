//! List Users Use Case
//!
//! Paginated user listing for the admin dashboard.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::policy;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_role::UserRole};
use crate::error::{IdentityError, IdentityResult};

const DEFAULT_PAGE_SIZE: i64 = 10;
const MAX_PAGE_SIZE: i64 = 100;

/// List users input
pub struct ListUsersInput {
    pub caller_email: String,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// List users output: one page plus the total count
pub struct ListUsersOutput {
    pub users: Vec<User>,
    pub total: i64,
}

/// List users use case
pub struct ListUsersUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> ListUsersUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: ListUsersInput) -> IdentityResult<ListUsersOutput> {
        let email = Email::new(input.caller_email)?;
        let caller = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(IdentityError::UserNotFound)?;

        policy::authorize(caller.role, &[UserRole::Admin])?;

        let page = input.page.unwrap_or(1).max(1);
        let limit = input
            .limit
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);
        let offset = (page - 1) * limit;

        let (users, total) = self.repo.list(offset, limit).await?;
        Ok(ListUsersOutput { users, total })
    }
}
