//! Repository Traits

use identity::domain::value_object::user_id::UserId;
use kernel::id::ContestId;

use crate::domain::entity::Task;
use crate::error::TaskResult;

/// Task repository trait
#[trait_variant::make(TaskRepository: Send)]
pub trait LocalTaskRepository {
    /// Insert a submission; returns false when one already exists for
    /// the same (contest, participant) pair
    async fn create(&self, task: &Task) -> TaskResult<bool>;

    /// The participant's submission for a contest, if any
    async fn find_by_contest_and_participant(
        &self,
        contest_id: &ContestId,
        participant_id: &UserId,
    ) -> TaskResult<Option<Task>>;
}
