//! Fetch Task Use Case

use std::sync::Arc;

use identity::domain::value_object::email::Email;
use identity::{UserRepository, UserRole, authorize};
use kernel::id::ContestId;

use crate::domain::entity::Task;
use crate::domain::repository::TaskRepository;
use crate::error::{TaskError, TaskResult};

/// Fetch the caller's own submission for a contest, if any
pub struct FetchTaskUseCase<T, U>
where
    T: TaskRepository,
    U: UserRepository,
{
    tasks: Arc<T>,
    users: Arc<U>,
}

impl<T, U> FetchTaskUseCase<T, U>
where
    T: TaskRepository,
    U: UserRepository,
{
    pub fn new(tasks: Arc<T>, users: Arc<U>) -> Self {
        Self { tasks, users }
    }

    pub async fn execute(
        &self,
        caller_email: &str,
        contest_id: ContestId,
    ) -> TaskResult<Option<Task>> {
        let email = Email::new(caller_email).map_err(TaskError::from)?;
        let caller = self
            .users
            .find_by_email(&email)
            .await
            .map_err(TaskError::from)?
            .ok_or(TaskError::UserNotFound)?;
        authorize(caller.role, &[UserRole::User])?;

        self.tasks
            .find_by_contest_and_participant(&contest_id, &caller.user_id)
            .await
    }
}
