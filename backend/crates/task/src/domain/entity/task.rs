//! Task Entity

use chrono::{DateTime, Utc};
use identity::domain::value_object::user_id::UserId;
use kernel::id::{ContestId, TaskId};

/// Task entity
///
/// One participant's submission for one contest. The store enforces at
/// most one per (contest, participant).
#[derive(Debug, Clone)]
pub struct Task {
    pub task_id: TaskId,
    pub contest_id: ContestId,
    pub participant_id: UserId,
    /// Submission payload, typically a link or free text
    pub submission: String,
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn new(contest_id: ContestId, participant_id: UserId, submission: String) -> Self {
        Self {
            task_id: TaskId::new(),
            contest_id,
            participant_id,
            submission,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task() {
        let contest_id = ContestId::new();
        let participant_id = UserId::new();
        let task = Task::new(contest_id, participant_id, "https://example.com/entry".into());
        assert_eq!(task.contest_id, contest_id);
        assert_eq!(task.participant_id, participant_id);
    }
}
