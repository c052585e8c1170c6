//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use identity::domain::value_object::user_id::UserId;
use kernel::id::{ContestId, TaskId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::Task;
use crate::domain::repository::TaskRepository;
use crate::error::{TaskError, TaskResult};

const FK_VIOLATION: &str = "23503";

/// PostgreSQL-backed task repository
#[derive(Clone)]
pub struct PgTaskRepository {
    pool: PgPool,
}

impl PgTaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl TaskRepository for PgTaskRepository {
    async fn create(&self, task: &Task) -> TaskResult<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO tasks (task_id, contest_id, participant_id, submission, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (contest_id, participant_id) DO NOTHING
            "#,
        )
        .bind(task.task_id.as_uuid())
        .bind(task.contest_id.as_uuid())
        .bind(task.participant_id.as_uuid())
        .bind(&task.submission)
        .bind(task.created_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(done) => Ok(done.rows_affected() == 1),
            // A dangling contest id violates the FK rather than the
            // unique index.
            Err(sqlx::Error::Database(e)) if e.code().as_deref() == Some(FK_VIOLATION) => {
                Err(TaskError::ContestNotFound)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_contest_and_participant(
        &self,
        contest_id: &ContestId,
        participant_id: &UserId,
    ) -> TaskResult<Option<Task>> {
        let row = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT task_id, contest_id, participant_id, submission, created_at
            FROM tasks
            WHERE contest_id = $1 AND participant_id = $2
            "#,
        )
        .bind(contest_id.as_uuid())
        .bind(participant_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(TaskRow::into_task))
    }
}

#[derive(sqlx::FromRow)]
struct TaskRow {
    task_id: Uuid,
    contest_id: Uuid,
    participant_id: Uuid,
    submission: String,
    created_at: DateTime<Utc>,
}

impl TaskRow {
    fn into_task(self) -> Task {
        Task {
            task_id: TaskId::from_uuid(self.task_id),
            contest_id: ContestId::from_uuid(self.contest_id),
            participant_id: UserId::from_uuid(self.participant_id),
            submission: self.submission,
            created_at: self.created_at,
        }
    }
}
