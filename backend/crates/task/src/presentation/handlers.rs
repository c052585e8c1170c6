//! HTTP Handlers

use std::sync::Arc;

use axum::{
    Json,
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use identity::presentation::middleware::Caller;
use identity::{IdentityConfig, UserRepository};
use kernel::id::ContestId;

use crate::application::{FetchTaskUseCase, SubmitTaskInput, SubmitTaskUseCase};
use crate::domain::repository::TaskRepository;
use crate::error::{TaskError, TaskResult};
use crate::presentation::dto::{SubmitTaskRequest, TaskResponse};

/// Shared state for the task router
#[derive(Debug)]
pub struct TaskAppState<T, U>
where
    T: TaskRepository,
    U: UserRepository,
{
    pub tasks: Arc<T>,
    pub users: Arc<U>,
    pub identity_config: Arc<IdentityConfig>,
}

impl<T, U> Clone for TaskAppState<T, U>
where
    T: TaskRepository,
    U: UserRepository,
{
    fn clone(&self) -> Self {
        Self {
            tasks: Arc::clone(&self.tasks),
            users: Arc::clone(&self.users),
            identity_config: Arc::clone(&self.identity_config),
        }
    }
}

impl<T, U> FromRef<TaskAppState<T, U>> for Arc<IdentityConfig>
where
    T: TaskRepository,
    U: UserRepository,
{
    fn from_ref(state: &TaskAppState<T, U>) -> Self {
        Arc::clone(&state.identity_config)
    }
}

fn parse_contest_id(id: &str) -> TaskResult<ContestId> {
    ContestId::parse_str(id).map_err(|_| TaskError::Validation(format!("Invalid contest id: {id}")))
}

/// POST /contests/{contestId}: submit the caller's entry
pub async fn submit_task<T, U>(
    State(state): State<TaskAppState<T, U>>,
    caller: Caller,
    Path(contest_id): Path<String>,
    Json(body): Json<SubmitTaskRequest>,
) -> Result<Response, TaskError>
where
    T: TaskRepository,
    U: UserRepository,
{
    let contest_id = parse_contest_id(&contest_id)?;
    let use_case = SubmitTaskUseCase::new(Arc::clone(&state.tasks), Arc::clone(&state.users));
    let task = use_case
        .execute(SubmitTaskInput {
            caller_email: caller.email,
            contest_id,
            submission: body.submission,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(TaskResponse::from(task))).into_response())
}

/// GET /contests/{contestId}: the caller's entry, or null
pub async fn fetch_task<T, U>(
    State(state): State<TaskAppState<T, U>>,
    caller: Caller,
    Path(contest_id): Path<String>,
) -> TaskResult<Json<Option<TaskResponse>>>
where
    T: TaskRepository,
    U: UserRepository,
{
    let contest_id = parse_contest_id(&contest_id)?;
    let use_case = FetchTaskUseCase::new(Arc::clone(&state.tasks), Arc::clone(&state.users));
    let task = use_case.execute(&caller.email, contest_id).await?;

    Ok(Json(task.map(TaskResponse::from)))
}
