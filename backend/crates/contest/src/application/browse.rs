//! Public Browse Surfaces

use std::sync::Arc;

use identity::{UserRepository, UserRole, authorize};

use crate::application::caller::resolve_caller;
use crate::domain::read_model::{AdminContestRow, ContestDetail, ContestSummary};
use crate::domain::repository::ContestRepository;
use crate::domain::value_object::contest_id::ContestId;
use crate::error::{ContestError, ContestResult};

const DEFAULT_PAGE_SIZE: i64 = 10;
const MAX_PAGE_SIZE: i64 = 100;

/// Browse accepted contests, optionally filtered by category name
pub struct BrowseContestsUseCase<C>
where
    C: ContestRepository,
{
    contests: Arc<C>,
}

impl<C> BrowseContestsUseCase<C>
where
    C: ContestRepository,
{
    pub fn new(contests: Arc<C>) -> Self {
        Self { contests }
    }

    pub async fn execute(&self, search: Option<String>) -> ContestResult<Vec<ContestSummary>> {
        let search = search.as_deref().map(str::trim).filter(|s| !s.is_empty());
        self.contests.browse_accepted(search).await
    }
}

/// Public contest detail with creator and winner profiles
pub struct GetContestUseCase<C>
where
    C: ContestRepository,
{
    contests: Arc<C>,
}

impl<C> GetContestUseCase<C>
where
    C: ContestRepository,
{
    pub fn new(contests: Arc<C>) -> Self {
        Self { contests }
    }

    pub async fn execute(&self, contest_id: ContestId) -> ContestResult<ContestDetail> {
        self.contests
            .detail(&contest_id)
            .await?
            .ok_or(ContestError::ContestNotFound)
    }
}

/// Admin list input
pub struct AdminListContestsInput {
    pub caller_email: String,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Admin list output: one page plus the total count
pub struct AdminListContestsOutput {
    pub contests: Vec<AdminContestRow>,
    pub total: i64,
}

/// Moderation listing: every contest regardless of status
pub struct AdminListContestsUseCase<C, U>
where
    C: ContestRepository,
    U: UserRepository,
{
    contests: Arc<C>,
    users: Arc<U>,
}

impl<C, U> AdminListContestsUseCase<C, U>
where
    C: ContestRepository,
    U: UserRepository,
{
    pub fn new(contests: Arc<C>, users: Arc<U>) -> Self {
        Self { contests, users }
    }

    pub async fn execute(
        &self,
        input: AdminListContestsInput,
    ) -> ContestResult<AdminListContestsOutput> {
        let caller = resolve_caller(self.users.as_ref(), &input.caller_email).await?;
        authorize(caller.role, &[UserRole::Admin])?;

        let limit = input
            .limit
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);
        let page = input.page.unwrap_or(1).max(1);
        let offset = (page - 1) * limit;

        let (contests, total) = self.contests.list_all(offset, limit).await?;

        Ok(AdminListContestsOutput { contests, total })
    }
}
