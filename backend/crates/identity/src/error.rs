//! Identity Error Types
//!
//! Identity-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::policy::AccessDenied;

/// Identity-specific result type alias
pub type IdentityResult<T> = Result<T, IdentityError>;

/// Identity-specific error variants
#[derive(Debug, Error)]
pub enum IdentityError {
    /// User not found
    #[error("User not found")]
    UserNotFound,

    /// Role not in the operation's allow-list
    #[error("Access Denied: Insufficient Permission")]
    AccessDenied,

    /// No access token presented
    #[error("Missing access token")]
    MissingToken,

    /// Token failed verification or expired
    #[error("Invalid or expired access token")]
    InvalidToken,

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

impl IdentityError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            IdentityError::UserNotFound => StatusCode::NOT_FOUND,
            IdentityError::AccessDenied => StatusCode::FORBIDDEN,
            IdentityError::MissingToken | IdentityError::InvalidToken => StatusCode::UNAUTHORIZED,
            IdentityError::Validation(_) => StatusCode::BAD_REQUEST,
            IdentityError::Database(_) | IdentityError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            IdentityError::UserNotFound => ErrorKind::NotFound,
            IdentityError::AccessDenied => ErrorKind::Forbidden,
            IdentityError::MissingToken | IdentityError::InvalidToken => ErrorKind::Unauthorized,
            IdentityError::Validation(_) => ErrorKind::BadRequest,
            IdentityError::Database(_) | IdentityError::Internal(_) => {
                ErrorKind::InternalServerError
            }
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
            IdentityError::Database(e) => {
                tracing::error!(error = %e, "Identity database error");
            }
            IdentityError::Internal(msg) => {
                tracing::error!(message = %msg, "Identity internal error");
            }
            IdentityError::AccessDenied => {
                tracing::warn!("Role check rejected request");
            }
            IdentityError::InvalidToken => {
                tracing::warn!("Invalid access token presented");
            }
            _ => {
                tracing::debug!(error = %self, "Identity error");
            }
        }
    }
}

impl IntoResponse for IdentityError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AccessDenied> for IdentityError {
    fn from(_: AccessDenied) -> Self {
        IdentityError::AccessDenied
    }
}

impl From<AppError> for IdentityError {
    fn from(err: AppError) -> Self {
        if err.is_client_error() {
            IdentityError::Validation(err.message().to_string())
        } else {
            IdentityError::Internal(err.to_string())
        }
    }
}

impl From<platform::token::TokenError> for IdentityError {
    fn from(_: platform::token::TokenError) -> Self {
        IdentityError::InvalidToken
    }
}
