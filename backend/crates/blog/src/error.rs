//! Blog Error Types
//!
//! Blog-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Blog-specific result type alias
pub type BlogResult<T> = Result<T, BlogError>;

/// Blog-specific error variants
#[derive(Debug, Error)]
pub enum BlogError {
    /// Article not found
    #[error("Article not found")]
    NotFound,

    /// Ownership or role mismatch
    #[error("{0}")]
    Forbidden(String),

    /// Missing or invalid input
    #[error("{0}")]
    Validation(String),

    /// Upload could not be stored
    #[error("Upload failed: {0}")]
    Upload(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BlogError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            BlogError::NotFound => StatusCode::NOT_FOUND,
            BlogError::Forbidden(_) => StatusCode::FORBIDDEN,
            BlogError::Validation(_) => StatusCode::BAD_REQUEST,
            BlogError::Upload(_) | BlogError::Database(_) | BlogError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BlogError::NotFound => ErrorKind::NotFound,
            BlogError::Forbidden(_) => ErrorKind::Forbidden,
            BlogError::Validation(_) => ErrorKind::BadRequest,
            BlogError::Upload(_) | BlogError::Database(_) | BlogError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    pub(crate) fn log(&self) {
        match self {
            BlogError::Database(e) => {
                tracing::error!(error = %e, "Blog database error");
            }
            BlogError::Upload(msg) => {
                tracing::error!(message = %msg, "Upload failure");
            }
            BlogError::Internal(msg) => {
                tracing::error!(message = %msg, "Blog internal error");
            }
            BlogError::Forbidden(_) => {
                tracing::warn!(error = %self, "Denied blog operation");
            }
            _ => {
                tracing::debug!(error = %self, "Blog error");
            }
        }
    }
}

impl IntoResponse for BlogError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
