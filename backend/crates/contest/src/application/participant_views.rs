//! Participant Views
//!
//! Surfaces scoped to the authenticated participant: registered
//! contests, winning contests, and aggregate statistics.

use std::sync::Arc;

use identity::{UserRepository, UserRole, authorize};

use crate::application::caller::resolve_caller;
use crate::domain::read_model::{ContestSummary, UserStats};
use crate::domain::repository::ContestRepository;
use crate::error::ContestResult;

/// Accepted contests where the caller is on the roster
pub struct RegisteredContestsUseCase<C, U>
where
    C: ContestRepository,
    U: UserRepository,
{
    contests: Arc<C>,
    users: Arc<U>,
}

impl<C, U> RegisteredContestsUseCase<C, U>
where
    C: ContestRepository,
    U: UserRepository,
{
    pub fn new(contests: Arc<C>, users: Arc<U>) -> Self {
        Self { contests, users }
    }

    pub async fn execute(&self, caller_email: &str) -> ContestResult<Vec<ContestSummary>> {
        let caller = resolve_caller(self.users.as_ref(), caller_email).await?;
        authorize(caller.role, &[UserRole::User])?;
        self.contests.registered_for(&caller.user_id).await
    }
}

/// Accepted contests the caller has won
pub struct WinningContestsUseCase<C, U>
where
    C: ContestRepository,
    U: UserRepository,
{
    contests: Arc<C>,
    users: Arc<U>,
}

impl<C, U> WinningContestsUseCase<C, U>
where
    C: ContestRepository,
    U: UserRepository,
{
    pub fn new(contests: Arc<C>, users: Arc<U>) -> Self {
        Self { contests, users }
    }

    pub async fn execute(&self, caller_email: &str) -> ContestResult<Vec<ContestSummary>> {
        let caller = resolve_caller(self.users.as_ref(), caller_email).await?;
        authorize(caller.role, &[UserRole::User])?;
        self.contests.won_by(&caller.user_id).await
    }
}

/// Aggregate statistics over the caller's accepted participations
///
/// The repository supplies fee/prize/win rows; the totals are folded
/// here.
pub struct UserStatsUseCase<C, U>
where
    C: ContestRepository,
    U: UserRepository,
{
    contests: Arc<C>,
    users: Arc<U>,
}

impl<C, U> UserStatsUseCase<C, U>
where
    C: ContestRepository,
    U: UserRepository,
{
    pub fn new(contests: Arc<C>, users: Arc<U>) -> Self {
        Self { contests, users }
    }

    pub async fn execute(&self, caller_email: &str) -> ContestResult<UserStats> {
        let caller = resolve_caller(self.users.as_ref(), caller_email).await?;
        authorize(caller.role, &[UserRole::User])?;
        let rows = self.contests.participations(&caller.user_id).await?;
        Ok(UserStats::from_rows(&rows))
    }
}
