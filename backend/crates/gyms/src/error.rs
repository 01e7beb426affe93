//! Gym Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Gym-specific result type alias
pub type GymResult<T> = Result<T, GymError>;

/// Gym-specific error variants
#[derive(Debug, Error)]
pub enum GymError {
    /// A gym with the same (location, setting_style) already exists
    #[error("Gym already exists for this location and setting style")]
    DuplicateGym,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl GymError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            GymError::DuplicateGym => StatusCode::CONFLICT,
            GymError::Database(_) | GymError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            GymError::DuplicateGym => ErrorKind::Conflict,
            GymError::Database(_) | GymError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            GymError::Database(e) => {
                tracing::error!(error = %e, "Gym database error");
            }
            GymError::Internal(msg) => {
                tracing::error!(message = %msg, "Gym internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Gym error");
            }
        }
    }
}

impl IntoResponse for GymError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_maps_to_conflict() {
        assert_eq!(GymError::DuplicateGym.status_code(), StatusCode::CONFLICT);
        assert_eq!(GymError::DuplicateGym.kind(), ErrorKind::Conflict);
    }
}
