//! Contest Error Types
//!
//! Contest-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use identity::AccessDenied;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Contest-specific result type alias
pub type ContestResult<T> = Result<T, ContestError>;

/// Contest-specific error variants
#[derive(Debug, Error)]
pub enum ContestError {
    /// Contest not found
    #[error("Contest not found")]
    ContestNotFound,

    /// Referenced user not found
    #[error("User not found")]
    UserNotFound,

    /// Role not in the operation's allow-list, or caller is not the owner
    #[error("Access Denied: Insufficient Permission")]
    AccessDenied,

    /// Balance below the contest creation cost
    #[error("Insufficient credits")]
    InsufficientCredits,

    /// Second registration for the same roster
    #[error("Already registered for this contest")]
    AlreadyRegistered,

    /// A winner has already been declared
    #[error("Winner already declared")]
    WinnerAlreadyDeclared,

    /// Declared winner is not on the participant roster
    #[error("Winner must be a contest participant")]
    WinnerNotParticipant,

    /// Winner declaration attempted before the deadline
    #[error("Contest deadline has not been reached")]
    DeadlineNotReached,

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

impl ContestError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ContestError::ContestNotFound | ContestError::UserNotFound => StatusCode::NOT_FOUND,
            ContestError::AccessDenied => StatusCode::FORBIDDEN,
            ContestError::AlreadyRegistered | ContestError::WinnerAlreadyDeclared => {
                StatusCode::CONFLICT
            }
            ContestError::InsufficientCredits
            | ContestError::WinnerNotParticipant
            | ContestError::DeadlineNotReached
            | ContestError::Validation(_) => StatusCode::BAD_REQUEST,
            ContestError::Database(_) | ContestError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ContestError::ContestNotFound | ContestError::UserNotFound => ErrorKind::NotFound,
            ContestError::AccessDenied => ErrorKind::Forbidden,
            ContestError::AlreadyRegistered | ContestError::WinnerAlreadyDeclared => {
                ErrorKind::Conflict
            }
            ContestError::InsufficientCredits
            | ContestError::WinnerNotParticipant
            | ContestError::DeadlineNotReached
            | ContestError::Validation(_) => ErrorKind::BadRequest,
            ContestError::Database(_) | ContestError::Internal(_) => ErrorKind::InternalServerError,
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
            ContestError::Database(e) => {
                tracing::error!(error = %e, "Contest database error");
            }
            ContestError::Internal(msg) => {
                tracing::error!(message = %msg, "Contest internal error");
            }
            ContestError::AccessDenied => {
                tracing::warn!("Role or ownership check rejected request");
            }
            _ => {
                tracing::debug!(error = %self, "Contest error");
            }
        }
    }
}

impl IntoResponse for ContestError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AccessDenied> for ContestError {
    fn from(_: AccessDenied) -> Self {
        ContestError::AccessDenied
    }
}

impl From<AppError> for ContestError {
    fn from(err: AppError) -> Self {
        if err.is_client_error() {
            ContestError::Validation(err.message().to_string())
        } else {
            ContestError::Internal(err.to_string())
        }
    }
}

impl From<identity::IdentityError> for ContestError {
    fn from(err: identity::IdentityError) -> Self {
        match err {
            identity::IdentityError::UserNotFound => ContestError::UserNotFound,
            identity::IdentityError::AccessDenied => ContestError::AccessDenied,
            identity::IdentityError::Validation(msg) => ContestError::Validation(msg),
            identity::IdentityError::Database(e) => ContestError::Database(e),
            other => ContestError::Internal(other.to_string()),
        }
    }
}
