//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic conversion into the JSON error envelope:
//! `{"success": false, "error": <status>, "message": <text>}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
///
/// The taxonomy is deliberately collapsed: validation failures and
/// downstream write failures both surface as `Unprocessable`.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    BadRequest(String),

    #[error("Authentication required")]
    Unauthorized,

    #[error("Access denied")]
    Forbidden,

    #[error("Resource not found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("{0} already exists")]
    Conflict(String),

    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    #[error("Too many requests")]
    TooManyRequests,

    // External service errors
    #[error("{0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Configuration error: {0}")]
    Configuration(String),

    // Internal
    #[error("{0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    success: bool,
    error: u16,
    message: String,
}

impl AppError {
    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::TooManyRequests => StatusCode::TOO_MANY_REQUESTS,
            AppError::Database(_) | AppError::Configuration(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the message placed in the response envelope.
    ///
    /// Client errors carry a fixed message per status code; anything
    /// unclassified carries its own description.
    pub fn user_message(&self) -> String {
        match self {
            AppError::BadRequest(detail) => {
                tracing::debug!("Bad request: {}", detail);
                "bad request".to_string()
            }
            AppError::Unauthorized => "unauthorized".to_string(),
            AppError::Forbidden => "forbidden".to_string(),
            AppError::NotFound => "resource not found".to_string(),
            AppError::MethodNotAllowed => "method not allowed".to_string(),
            AppError::Conflict(_) => "conflict".to_string(),
            AppError::Unprocessable(detail) => {
                tracing::debug!("Unprocessable request: {}", detail);
                "unprocessable".to_string()
            }
            AppError::TooManyRequests => "too many requests".to_string(),
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                e.to_string()
            }
            AppError::Configuration(msg) | AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                msg.clone()
            }
        }
    }

    /// Classify a bare status code produced outside the handlers
    /// (framework rejections, unmatched routes).
    ///
    /// Returns `None` for statuses outside the fixed error table.
    pub fn from_status(status: StatusCode) -> Option<Self> {
        let error = match status {
            StatusCode::BAD_REQUEST => AppError::BadRequest(status.to_string()),
            StatusCode::UNAUTHORIZED => AppError::Unauthorized,
            StatusCode::FORBIDDEN => AppError::Forbidden,
            StatusCode::NOT_FOUND => AppError::NotFound,
            StatusCode::METHOD_NOT_ALLOWED => AppError::MethodNotAllowed,
            StatusCode::CONFLICT => AppError::Conflict(status.to_string()),
            StatusCode::UNPROCESSABLE_ENTITY => AppError::Unprocessable(status.to_string()),
            StatusCode::TOO_MANY_REQUESTS => AppError::TooManyRequests,
            StatusCode::INTERNAL_SERVER_ERROR => AppError::Internal("internal server error".into()),
            _ => return None,
        };
        Some(error)
    }
}

/// Build an error envelope for an arbitrary status.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let body = ErrorResponse {
        success: false,
        error: status.as_u16(),
        message: message.into(),
    };

    (status, Json(body)).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error_response(self.status(), self.user_message())
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn unprocessable(msg: impl Into<String>) -> Self {
        AppError::Unprocessable(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::bad_request("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::unprocessable("x").status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::internal("boom").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_fixed_messages_hide_details() {
        assert_eq!(AppError::bad_request("searchTerm missing").user_message(), "bad request");
        assert_eq!(AppError::NotFound.user_message(), "resource not found");
        assert_eq!(AppError::unprocessable("no category").user_message(), "unprocessable");
        assert_eq!(AppError::TooManyRequests.user_message(), "too many requests");
    }

    #[test]
    fn test_unclassified_errors_carry_their_text() {
        assert_eq!(AppError::internal("connection reset").user_message(), "connection reset");
        let db = AppError::from(sea_orm::DbErr::Custom("pool timed out".into()));
        assert!(db.user_message().contains("pool timed out"));
        assert_eq!(db.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_from_status_round_trips_known_codes() {
        for status in [
            StatusCode::BAD_REQUEST,
            StatusCode::UNAUTHORIZED,
            StatusCode::FORBIDDEN,
            StatusCode::NOT_FOUND,
            StatusCode::METHOD_NOT_ALLOWED,
            StatusCode::CONFLICT,
            StatusCode::UNPROCESSABLE_ENTITY,
            StatusCode::TOO_MANY_REQUESTS,
        ] {
            assert_eq!(AppError::from_status(status).unwrap().status(), status);
        }
        assert!(AppError::from_status(StatusCode::UNSUPPORTED_MEDIA_TYPE).is_none());
    }

    #[test]
    fn test_option_ext() {
        let missing: Option<i32> = None;
        assert!(matches!(missing.ok_or_not_found(), Err(AppError::NotFound)));
        assert_eq!(Some(3).ok_or_not_found().unwrap(), 3);
    }
}
