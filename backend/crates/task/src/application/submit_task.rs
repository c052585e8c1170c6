//! Submit Task Use Case

use std::sync::Arc;

use identity::domain::value_object::email::Email;
use identity::{UserRepository, UserRole, authorize};
use kernel::id::ContestId;

use crate::domain::entity::Task;
use crate::domain::repository::TaskRepository;
use crate::error::{TaskError, TaskResult};

/// Submit task input
pub struct SubmitTaskInput {
    pub caller_email: String,
    pub contest_id: ContestId,
    pub submission: String,
}

/// Submit task use case
///
/// One submission per participant per contest; the store's unique index
/// makes a raced double submission surface as a conflict.
pub struct SubmitTaskUseCase<T, U>
where
    T: TaskRepository,
    U: UserRepository,
{
    tasks: Arc<T>,
    users: Arc<U>,
}

impl<T, U> SubmitTaskUseCase<T, U>
where
    T: TaskRepository,
    U: UserRepository,
{
    pub fn new(tasks: Arc<T>, users: Arc<U>) -> Self {
        Self { tasks, users }
    }

    pub async fn execute(&self, input: SubmitTaskInput) -> TaskResult<Task> {
        let email = Email::new(input.caller_email).map_err(TaskError::from)?;
        let caller = self
            .users
            .find_by_email(&email)
            .await
            .map_err(TaskError::from)?
            .ok_or(TaskError::UserNotFound)?;
        authorize(caller.role, &[UserRole::User])?;

        let submission = input.submission.trim().to_string();
        if submission.is_empty() {
            return Err(TaskError::Validation("Submission cannot be empty".to_string()));
        }

        let task = Task::new(input.contest_id, caller.user_id, submission);
        let inserted = self.tasks.create(&task).await?;
        if !inserted {
            return Err(TaskError::AlreadySubmitted);
        }

        tracing::info!(
            task_id = %task.task_id,
            contest_id = %task.contest_id,
            participant_id = %task.participant_id,
            "Task submitted"
        );

        Ok(task)
    }
}
