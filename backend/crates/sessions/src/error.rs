//! Session Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Session-specific result type alias
pub type SessionResult<T> = Result<T, SessionError>;

/// Session-specific error variants
#[derive(Debug, Error)]
pub enum SessionError {
    /// No session matched the (id, owner) filter
    ///
    /// Deliberately covers both "does not exist" and "owned by someone
    /// else" so existence never leaks.
    #[error("Session not found")]
    NotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SessionError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            SessionError::NotFound => StatusCode::NOT_FOUND,
            SessionError::Database(_) | SessionError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            SessionError::NotFound => ErrorKind::NotFound,
            SessionError::Database(_) | SessionError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            SessionError::Database(e) => {
                tracing::error!(error = %e, "Session database error");
            }
            SessionError::Internal(msg) => {
                tracing::error!(message = %msg, "Session internal error");
            }
            SessionError::NotFound => {
                tracing::debug!("Session lookup missed");
            }
        }
    }
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
