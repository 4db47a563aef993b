//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! Two client-facing kinds suffice for this API: **NotFound** (404) for a
//! missing entity id and **ValidationError** (400) for input validation
//! and business-rule violations at creation time. Storage-layer constraint
//! violations (duplicate isbn, foreign key rejections) are re-surfaced as
//! ValidationError rather than leaking database errors. Anything else is
//! an opaque 500.
//!
//! ## Serialization
//! This is what clients receive when a request fails:
//! ```json
//! {
//!   "code": "NOT_FOUND",
//!   "message": "Book not found: 7"
//! }
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use biblio_core::CoreError;
use biblio_db::DbError;

/// API error returned from HTTP handlers.
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (404)
    NotFound,

    /// Input validation or business-rule failure (400)
    ValidationError,

    /// Internal server error (500)
    Internal,
}

impl ErrorCode {
    fn status(self) -> StatusCode {
        match self {
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: i64) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.code.status();
        (status, Json(self)).into_response()
    }
}

/// Converts database errors to API errors.
///
/// ## Error Mapping
/// ```text
/// DbError::NotFound            → 404 NOT_FOUND
/// DbError::UniqueViolation     → 400 VALIDATION_ERROR
/// DbError::ForeignKeyViolation → 400 VALIDATION_ERROR
/// DbError::NotAvailable        → 400 VALIDATION_ERROR
/// Other                        → 500 INTERNAL
/// ```
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match &err {
            DbError::NotFound { .. } => ApiError::new(ErrorCode::NotFound, err.to_string()),
            DbError::UniqueViolation { .. }
            | DbError::ForeignKeyViolation { .. }
            | DbError::NotAvailable { .. } => ApiError::validation(err.to_string()),
            _ => {
                // Log the real cause, hand the client an opaque message.
                tracing::error!(error = %err, "database error");
                ApiError::internal("Internal server error")
            }
        }
    }
}

/// Converts domain errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match &err {
            CoreError::AuthorNotFound(_)
            | CoreError::BookNotFound(_)
            | CoreError::LoanNotFound(_) => ApiError::new(ErrorCode::NotFound, err.to_string()),
            CoreError::BookNotAvailable(_) | CoreError::Validation(_) => {
                ApiError::validation(err.to_string())
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
