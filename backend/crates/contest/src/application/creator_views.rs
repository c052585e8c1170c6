//! Creator Views
//!
//! Listing and detail surfaces restricted to the owning creator.

use std::sync::Arc;

use identity::domain::value_object::user_id::UserId;
use identity::{UserRepository, UserRole, authorize};

use crate::application::caller::resolve_caller;
use crate::domain::entity::Contest;
use crate::domain::read_model::{ContestSummary, ParticipantSubmission};
use crate::domain::repository::ContestRepository;
use crate::domain::value_object::contest_id::ContestId;
use crate::error::{ContestError, ContestResult};

const DEFAULT_PAGE_SIZE: i64 = 10;
const MAX_PAGE_SIZE: i64 = 100;

/// List creator contests input
pub struct ListCreatorContestsInput {
    pub caller_email: String,
    pub creator_id: UserId,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// List creator contests output: one page plus the total count
pub struct ListCreatorContestsOutput {
    pub contests: Vec<ContestSummary>,
    pub total: i64,
}

/// List a creator's own contests, all statuses, newest first
pub struct ListCreatorContestsUseCase<C, U>
where
    C: ContestRepository,
    U: UserRepository,
{
    contests: Arc<C>,
    users: Arc<U>,
}

impl<C, U> ListCreatorContestsUseCase<C, U>
where
    C: ContestRepository,
    U: UserRepository,
{
    pub fn new(contests: Arc<C>, users: Arc<U>) -> Self {
        Self { contests, users }
    }

    pub async fn execute(
        &self,
        input: ListCreatorContestsInput,
    ) -> ContestResult<ListCreatorContestsOutput> {
        let caller = resolve_caller(self.users.as_ref(), &input.caller_email).await?;
        authorize(caller.role, &[UserRole::Creator])?;
        if caller.user_id != input.creator_id {
            return Err(ContestError::AccessDenied);
        }

        let limit = input
            .limit
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);
        let page = input.page.unwrap_or(1).max(1);
        let offset = (page - 1) * limit;

        let (contests, total) = self
            .contests
            .list_by_creator(&input.creator_id, offset, limit)
            .await?;

        Ok(ListCreatorContestsOutput { contests, total })
    }
}

/// Creator contest detail input
pub struct CreatorContestDetailInput {
    pub caller_email: String,
    pub contest_id: ContestId,
    pub creator_id: UserId,
}

/// Creator contest detail: the contest plus its roster, each entry
/// joined with the participant's submission
pub struct CreatorContestView {
    pub contest: Contest,
    pub participants: Vec<ParticipantSubmission>,
}

/// Creator-side contest detail use case
pub struct CreatorContestDetailUseCase<C, U>
where
    C: ContestRepository,
    U: UserRepository,
{
    contests: Arc<C>,
    users: Arc<U>,
}

impl<C, U> CreatorContestDetailUseCase<C, U>
where
    C: ContestRepository,
    U: UserRepository,
{
    pub fn new(contests: Arc<C>, users: Arc<U>) -> Self {
        Self { contests, users }
    }

    pub async fn execute(
        &self,
        input: CreatorContestDetailInput,
    ) -> ContestResult<CreatorContestView> {
        let caller = resolve_caller(self.users.as_ref(), &input.caller_email).await?;
        authorize(caller.role, &[UserRole::Creator])?;
        if caller.user_id != input.creator_id {
            return Err(ContestError::AccessDenied);
        }

        let contest = self
            .contests
            .find_by_id(&input.contest_id)
            .await?
            .ok_or(ContestError::ContestNotFound)?;
        if !contest.is_owned_by(&input.creator_id) {
            return Err(ContestError::AccessDenied);
        }

        let participants = self.contests.participant_grid(&input.contest_id).await?;

        Ok(CreatorContestView {
            contest,
            participants,
        })
    }
}
