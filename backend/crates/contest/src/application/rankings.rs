//! Public Rankings
//!
//! Popularity and prize-money aggregations over accepted contests.
//! All four surfaces are public; row limits come from `ContestConfig`.

use std::sync::Arc;

use crate::application::config::ContestConfig;
use crate::domain::read_model::{ContestSummary, CreatorRanking, LeaderboardEntry, WinnerSummary};
use crate::domain::repository::ContestRepository;
use crate::error::ContestResult;

/// Accepted contests by roster size
pub struct PopularContestsUseCase<C>
where
    C: ContestRepository,
{
    contests: Arc<C>,
    config: Arc<ContestConfig>,
}

impl<C> PopularContestsUseCase<C>
where
    C: ContestRepository,
{
    pub fn new(contests: Arc<C>, config: Arc<ContestConfig>) -> Self {
        Self { contests, config }
    }

    pub async fn execute(&self) -> ContestResult<Vec<ContestSummary>> {
        self.contests.popular(self.config.popular_limit).await
    }
}

/// Creators ranked by total prize money across accepted contests
pub struct BestCreatorsUseCase<C>
where
    C: ContestRepository,
{
    contests: Arc<C>,
    config: Arc<ContestConfig>,
}

impl<C> BestCreatorsUseCase<C>
where
    C: ContestRepository,
{
    pub fn new(contests: Arc<C>, config: Arc<ContestConfig>) -> Self {
        Self { contests, config }
    }

    pub async fn execute(&self) -> ContestResult<Vec<CreatorRanking>> {
        self.contests
            .best_creators(self.config.best_creator_limit)
            .await
    }
}

/// Winners ranked by total prize money; contests without a declared
/// winner never contribute
pub struct LeaderboardUseCase<C>
where
    C: ContestRepository,
{
    contests: Arc<C>,
    config: Arc<ContestConfig>,
}

impl<C> LeaderboardUseCase<C>
where
    C: ContestRepository,
{
    pub fn new(contests: Arc<C>, config: Arc<ContestConfig>) -> Self {
        Self { contests, config }
    }

    pub async fn execute(&self) -> ContestResult<Vec<LeaderboardEntry>> {
        self.contests
            .leaderboard(self.config.leaderboard_limit)
            .await
    }
}

/// Accepted contests whose winner has been declared
pub struct WinnersUseCase<C>
where
    C: ContestRepository,
{
    contests: Arc<C>,
}

impl<C> WinnersUseCase<C>
where
    C: ContestRepository,
{
    pub fn new(contests: Arc<C>) -> Self {
        Self { contests }
    }

    pub async fn execute(&self) -> ContestResult<Vec<WinnerSummary>> {
        self.contests.winners().await
    }
}
