//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in the
//! infrastructure layer.

use identity::domain::value_object::user_id::UserId;

use crate::domain::entity::Contest;
use crate::domain::read_model::{
    AdminContestRow, ContestDetail, ContestSummary, CreatorRanking, LeaderboardEntry,
    ParticipantSubmission, ParticipationRow, WinnerSummary,
};
use crate::domain::value_object::contest_id::ContestId;
use crate::error::ContestResult;

/// Contest repository trait
#[trait_variant::make(ContestRepository: Send)]
pub trait LocalContestRepository {
    /// Debit the creation cost from the creator's balance and insert the
    /// contest as one atomic operation. The debit is conditional on the
    /// balance covering the cost; when it does not, nothing is written
    /// and `InsufficientCredits` is returned.
    async fn create(&self, contest: &Contest, creation_cost: i64) -> ContestResult<()>;

    /// Find contest by ID
    async fn find_by_id(&self, contest_id: &ContestId) -> ContestResult<Option<Contest>>;

    /// Persist edited fields (draft fields, status, updated_at)
    async fn update(&self, contest: &Contest) -> ContestResult<()>;

    /// Delete a contest; the roster and submitted tasks go with it
    async fn delete(&self, contest_id: &ContestId) -> ContestResult<()>;

    /// Append a user to the roster; returns false when the user is
    /// already registered (the insert is a no-op in that case)
    async fn add_participant(&self, contest_id: &ContestId, user_id: &UserId)
    -> ContestResult<bool>;

    /// Whether the user is on the roster
    async fn is_participant(&self, contest_id: &ContestId, user_id: &UserId)
    -> ContestResult<bool>;

    /// Set the winner only if none has been declared yet; returns false
    /// when the slot was already filled
    async fn set_winner_if_unset(
        &self,
        contest_id: &ContestId,
        winner_id: &UserId,
    ) -> ContestResult<bool>;

    /// Contests owned by a creator, newest first, with total count
    async fn list_by_creator(
        &self,
        creator_id: &UserId,
        offset: i64,
        limit: i64,
    ) -> ContestResult<(Vec<ContestSummary>, i64)>;

    /// All contests regardless of status, newest first, with total count
    async fn list_all(&self, offset: i64, limit: i64)
    -> ContestResult<(Vec<AdminContestRow>, i64)>;

    /// Accepted contests, optionally filtered by category name match,
    /// largest roster first
    async fn browse_accepted(&self, search: Option<&str>) -> ContestResult<Vec<ContestSummary>>;

    /// Public detail with creator and winner profiles
    async fn detail(&self, contest_id: &ContestId) -> ContestResult<Option<ContestDetail>>;

    /// Roster joined with each participant's submission, registration order
    async fn participant_grid(
        &self,
        contest_id: &ContestId,
    ) -> ContestResult<Vec<ParticipantSubmission>>;

    /// Accepted contests where the user is on the roster
    async fn registered_for(&self, user_id: &UserId) -> ContestResult<Vec<ContestSummary>>;

    /// Accepted contests the user has won
    async fn won_by(&self, user_id: &UserId) -> ContestResult<Vec<ContestSummary>>;

    /// Fee/prize/win rows over the user's accepted participations
    async fn participations(&self, user_id: &UserId) -> ContestResult<Vec<ParticipationRow>>;

    /// Accepted contests by roster size, descending
    async fn popular(&self, limit: i64) -> ContestResult<Vec<ContestSummary>>;

    /// Accepted contests grouped by creator, by total prize money
    async fn best_creators(&self, limit: i64) -> ContestResult<Vec<CreatorRanking>>;

    /// Accepted contests with a declared winner, grouped by winner
    async fn leaderboard(&self, limit: i64) -> ContestResult<Vec<LeaderboardEntry>>;

    /// Accepted contests with a declared winner, newest first
    async fn winners(&self) -> ContestResult<Vec<WinnerSummary>>;
}
