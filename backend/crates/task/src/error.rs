//! Task Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use identity::AccessDenied;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Task-specific result type alias
pub type TaskResult<T> = Result<T, TaskError>;

/// Task-specific error variants
#[derive(Debug, Error)]
pub enum TaskError {
    /// Referenced contest not found
    #[error("Contest not found")]
    ContestNotFound,

    /// Caller not found
    #[error("User not found")]
    UserNotFound,

    /// Role not in the operation's allow-list
    #[error("Access Denied: Insufficient Permission")]
    AccessDenied,

    /// Second submission for the same contest
    #[error("Already submitted")]
    AlreadySubmitted,

    /// Field-level validation failure
    #[error("{0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TaskError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            TaskError::ContestNotFound | TaskError::UserNotFound => StatusCode::NOT_FOUND,
            TaskError::AccessDenied => StatusCode::FORBIDDEN,
            TaskError::AlreadySubmitted => StatusCode::CONFLICT,
            TaskError::Validation(_) => StatusCode::BAD_REQUEST,
            TaskError::Database(_) | TaskError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            TaskError::ContestNotFound | TaskError::UserNotFound => ErrorKind::NotFound,
            TaskError::AccessDenied => ErrorKind::Forbidden,
            TaskError::AlreadySubmitted => ErrorKind::Conflict,
            TaskError::Validation(_) => ErrorKind::BadRequest,
            TaskError::Database(_) | TaskError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError; 5xx detail never leaks to the client
    pub fn to_app_error(&self) -> AppError {
        if self.kind().is_server_error() {
            AppError::new(self.kind(), "Internal server error")
        } else {
            AppError::new(self.kind(), self.to_string())
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            TaskError::Database(e) => {
                tracing::error!(error = %e, "Task database error");
            }
            TaskError::Internal(msg) => {
                tracing::error!(message = %msg, "Task internal error");
            }
            TaskError::AccessDenied => {
                tracing::warn!("Role check rejected request");
            }
            _ => {
                tracing::debug!(error = %self, "Task error");
            }
        }
    }
}

impl IntoResponse for TaskError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AccessDenied> for TaskError {
    fn from(_: AccessDenied) -> Self {
        TaskError::AccessDenied
    }
}

impl From<AppError> for TaskError {
    fn from(err: AppError) -> Self {
        if err.is_client_error() {
            TaskError::Validation(err.message().to_string())
        } else {
            TaskError::Internal(err.to_string())
        }
    }
}

impl From<identity::IdentityError> for TaskError {
    fn from(err: identity::IdentityError) -> Self {
        match err {
            identity::IdentityError::UserNotFound => TaskError::UserNotFound,
            identity::IdentityError::AccessDenied => TaskError::AccessDenied,
            identity::IdentityError::Validation(msg) => TaskError::Validation(msg),
            identity::IdentityError::Database(e) => TaskError::Database(e),
            other => TaskError::Internal(other.to_string()),
        }
    }
}
