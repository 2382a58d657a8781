//! Error handling - maps application errors to `{message}` HTTP responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use quill_shared::MessageResponse;
use std::fmt;

/// Application-level error type that converts to `{message}` responses.
#[derive(Debug)]
pub enum AppError {
    /// 400 with a caller-facing detail message.
    BadRequest(String),
    /// 400 with the fixed "Invalid ID" message, masking the underlying detail.
    InvalidId,
    /// 404 - the post does not exist.
    NotFound,
    /// 500 with the raw failure detail.
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::InvalidId => write!(f, "Invalid ID"),
            AppError::NotFound => write!(f, "Blog not found"),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) | AppError::InvalidId => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::BadRequest(detail) => detail.clone(),
            AppError::InvalidId => "Invalid ID".to_string(),
            AppError::NotFound => "Blog not found".to_string(),
            AppError::Internal(detail) => {
                tracing::error!("Store error: {}", detail);
                detail.clone()
            }
        };

        HttpResponse::build(self.status_code()).json(MessageResponse::new(message))
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_the_error_taxonomy() {
        assert_eq!(
            AppError::BadRequest("x".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::InvalidId.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Internal("x".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
