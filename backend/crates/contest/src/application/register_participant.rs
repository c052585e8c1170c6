//! Register Participant Use Case

use std::sync::Arc;

use identity::{UserRepository, UserRole, authorize};

use crate::application::caller::resolve_caller;
use crate::domain::repository::ContestRepository;
use crate::domain::value_object::contest_id::ContestId;
use crate::error::{ContestError, ContestResult};

/// Register participant input
pub struct RegisterParticipantInput {
    pub caller_email: String,
    pub contest_id: ContestId,
}

/// Register participant use case
///
/// The roster insert itself enforces uniqueness, so a raced double
/// registration surfaces as a conflict rather than a duplicate row.
pub struct RegisterParticipantUseCase<C, U>
where
    C: ContestRepository,
    U: UserRepository,
{
    contests: Arc<C>,
    users: Arc<U>,
}

impl<C, U> RegisterParticipantUseCase<C, U>
where
    C: ContestRepository,
    U: UserRepository,
{
    pub fn new(contests: Arc<C>, users: Arc<U>) -> Self {
        Self { contests, users }
    }

    pub async fn execute(&self, input: RegisterParticipantInput) -> ContestResult<()> {
        let caller = resolve_caller(self.users.as_ref(), &input.caller_email).await?;
        authorize(caller.role, &[UserRole::User])?;

        self.contests
            .find_by_id(&input.contest_id)
            .await?
            .ok_or(ContestError::ContestNotFound)?;

        let inserted = self
            .contests
            .add_participant(&input.contest_id, &caller.user_id)
            .await?;
        if !inserted {
            return Err(ContestError::AlreadyRegistered);
        }

        tracing::info!(
            contest_id = %input.contest_id,
            user_id = %caller.user_id,
            "Participant registered"
        );

        Ok(())
    }
}
