//! Router

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use identity::{IdentityConfig, UserRepository};

use crate::domain::repository::TaskRepository;
use crate::presentation::handlers::{self, TaskAppState};

/// Build the task router
pub fn task_router<T, U>(
    tasks: Arc<T>,
    users: Arc<U>,
    identity_config: Arc<IdentityConfig>,
) -> Router
where
    T: TaskRepository + Sync + 'static,
    U: UserRepository + Sync + 'static,
{
    let state = TaskAppState {
        tasks,
        users,
        identity_config,
    };

    Router::new()
        .route(
            "/contests/{contest_id}",
            get(handlers::fetch_task::<T, U>).post(handlers::submit_task::<T, U>),
        )
        .with_state(state)
}
