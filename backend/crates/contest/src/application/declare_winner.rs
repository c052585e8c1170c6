//! Declare Winner Use Case

use std::sync::Arc;

use chrono::Utc;
use identity::domain::value_object::user_id::UserId;
use identity::{UserRepository, UserRole, authorize};

use crate::application::caller::resolve_caller;
use crate::domain::entity::Contest;
use crate::domain::repository::ContestRepository;
use crate::domain::value_object::contest_id::ContestId;
use crate::error::{ContestError, ContestResult};

/// Declare winner input
pub struct DeclareWinnerInput {
    pub caller_email: String,
    pub contest_id: ContestId,
    pub winner_id: UserId,
}

/// Declare winner use case
///
/// Only the owning creator may declare, only after the deadline, only
/// once, and only for a user on the roster. The write is conditional on
/// the winner slot being empty, so of two racing declarations exactly
/// one lands and the other surfaces as a conflict.
pub struct DeclareWinnerUseCase<C, U>
where
    C: ContestRepository,
    U: UserRepository,
{
    contests: Arc<C>,
    users: Arc<U>,
}

impl<C, U> DeclareWinnerUseCase<C, U>
where
    C: ContestRepository,
    U: UserRepository,
{
    pub fn new(contests: Arc<C>, users: Arc<U>) -> Self {
        Self { contests, users }
    }

    pub async fn execute(&self, input: DeclareWinnerInput) -> ContestResult<Contest> {
        let caller = resolve_caller(self.users.as_ref(), &input.caller_email).await?;
        authorize(caller.role, &[UserRole::Creator])?;

        let mut contest = self
            .contests
            .find_by_id(&input.contest_id)
            .await?
            .ok_or(ContestError::ContestNotFound)?;

        if !contest.is_owned_by(&caller.user_id) {
            return Err(ContestError::AccessDenied);
        }
        if !contest.is_closed(Utc::now()) {
            return Err(ContestError::DeadlineNotReached);
        }
        if contest.has_winner() {
            return Err(ContestError::WinnerAlreadyDeclared);
        }
        if !self
            .contests
            .is_participant(&input.contest_id, &input.winner_id)
            .await?
        {
            return Err(ContestError::WinnerNotParticipant);
        }

        let updated = self
            .contests
            .set_winner_if_unset(&input.contest_id, &input.winner_id)
            .await?;
        if !updated {
            return Err(ContestError::WinnerAlreadyDeclared);
        }

        contest.winner_id = Some(input.winner_id);

        tracing::info!(
            contest_id = %input.contest_id,
            winner_id = %input.winner_id,
            "Winner declared"
        );

        Ok(contest)
    }
}
