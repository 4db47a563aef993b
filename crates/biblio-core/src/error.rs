//! # Error Types
//!
//! Domain-specific error types for biblio-core.
//!
//! ## Error Hierarchy
//! ```text
//! biblio-core errors (this file)
//! ├── CoreError        - Business rule violations
//! └── ValidationError  - Input validation failures
//!
//! biblio-db errors (separate crate)
//! └── DbError          - Database operation failures
//!
//! HTTP errors (in server)
//! └── ApiError         - What clients see (status code + JSON body)
//!
//! Flow: ValidationError → CoreError → DbError → ApiError → Client
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (entity ids, field names)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These represent business rule violations or domain logic failures.
/// They are translated to client-facing messages at the API boundary.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Author cannot be found.
    #[error("Author not found: {0}")]
    AuthorNotFound(i64),

    /// Book cannot be found.
    #[error("Book not found: {0}")]
    BookNotFound(i64),

    /// Loan cannot be found.
    #[error("Loan not found: {0}")]
    LoanNotFound(i64),

    /// Book exists but is currently lent out.
    ///
    /// ## When This Occurs
    /// - Creating a loan against a book whose `available` flag is false
    /// - Two concurrent loan creations racing for the same book (the
    ///   loser observes this error)
    #[error("Book {0} is not available")]
    BookNotAvailable(i64),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when client input does not meet requirements, before any
/// business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing, empty, or all whitespace.
    #[error("{field} is required")]
    Required { field: String },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
