//! Delete Contest Use Case

use std::sync::Arc;

use identity::{UserRepository, UserRole, authorize};

use crate::application::caller::resolve_caller;
use crate::domain::repository::ContestRepository;
use crate::domain::value_object::contest_id::ContestId;
use crate::error::{ContestError, ContestResult};

/// Delete contest input
pub struct DeleteContestInput {
    pub caller_email: String,
    pub contest_id: ContestId,
}

/// Delete contest use case
///
/// The roster and submitted tasks are removed with the contest.
pub struct DeleteContestUseCase<C, U>
where
    C: ContestRepository,
    U: UserRepository,
{
    contests: Arc<C>,
    users: Arc<U>,
}

impl<C, U> DeleteContestUseCase<C, U>
where
    C: ContestRepository,
    U: UserRepository,
{
    pub fn new(contests: Arc<C>, users: Arc<U>) -> Self {
        Self { contests, users }
    }

    pub async fn execute(&self, input: DeleteContestInput) -> ContestResult<()> {
        let caller = resolve_caller(self.users.as_ref(), &input.caller_email).await?;
        authorize(caller.role, &[UserRole::Creator, UserRole::Admin])?;

        let contest = self
            .contests
            .find_by_id(&input.contest_id)
            .await?
            .ok_or(ContestError::ContestNotFound)?;

        if !caller.role.is_admin() && !contest.is_owned_by(&caller.user_id) {
            return Err(ContestError::AccessDenied);
        }

        self.contests.delete(&input.contest_id).await?;

        tracing::info!(
            contest_id = %input.contest_id,
            caller_id = %caller.user_id,
            "Contest deleted"
        );

        Ok(())
    }
}
