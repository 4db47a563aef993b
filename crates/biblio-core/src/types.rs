//! # Domain Types
//!
//! Core domain types used throughout the Biblio catalog.
//!
//! ## Entity Relationships
//! ```text
//! ┌─────────────┐ 1     * ┌─────────────┐ 1     * ┌─────────────┐
//! │   Author    │◄────────│    Book     │◄────────│    Loan     │
//! │ ─────────── │         │ ─────────── │         │ ─────────── │
//! │ id (i64)    │         │ id (i64)    │         │ id (i64)    │
//! │ name        │         │ title       │         │ book_id(FK) │
//! │ nationality │         │ isbn (uniq) │         │ user_name   │
//! └─────────────┘         │ author_id   │         │ loan_date   │
//!                         │ available   │         │ returned    │
//!                         └─────────────┘         └─────────────┘
//! ```
//!
//! All cross-references are by id; Book does not own an Author object and
//! Loan does not own a Book object. Lookups go through the repositories.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Author
// =============================================================================

/// A person credited on one or more books.
///
/// Authors are independent roots: they exist before any book referencing
/// them can be created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    /// Server-assigned identifier (SQLite rowid).
    pub id: i64,

    /// Display name, stored title-cased.
    pub name: String,

    /// Nationality, stored title-cased.
    pub nationality: String,
}

/// Input for creating an author. Fields are validated and title-cased
/// before persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAuthor {
    pub name: String,
    pub nationality: String,
}

// =============================================================================
// Book
// =============================================================================

/// A catalog item with exactly one author and a single availability flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Server-assigned identifier.
    pub id: i64,

    /// Title, stored upper-cased.
    pub title: String,

    /// ISBN, stored with the `ISBN-` prefix. Unique across the catalog.
    pub isbn: String,

    /// The author this book belongs to.
    pub author_id: i64,

    /// Cached availability flag.
    ///
    /// ## Invariant
    /// `available` is true iff no open loan references this book. The flag
    /// is maintained transactionally by every loan create/delete path; it
    /// is never recomputed from loan rows.
    pub available: bool,
}

/// Input for creating a book, after [`crate::validation::transform_book_input`]
/// has been applied. Title is upper-cased and the isbn carries its prefix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub isbn: String,
    pub author_id: i64,
}

// =============================================================================
// Loan
// =============================================================================

/// A record of a book currently borrowed by a named user.
///
/// A loan's existence is the sole signal of "book currently lent out":
/// returning a book deletes the loan row and flips the book back to
/// available. The `returned` flag is carried for the statistics shape but
/// is structurally false for any live row under the delete-on-return
/// lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    /// Server-assigned identifier.
    pub id: i64,

    /// The book this loan holds.
    pub book_id: i64,

    /// Borrower name, stored title-cased.
    pub user_name: String,

    /// When the loan was created.
    pub loan_date: DateTime<Utc>,

    /// Whether the loan has been marked returned.
    pub returned: bool,
}

/// Input for creating a loan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLoan {
    pub book_id: i64,
    pub user_name: String,
}

// =============================================================================
// Loan Statistics
// =============================================================================

/// Aggregate loan counts, computed by [`crate::stats::compute_loan_statistics`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoanStatistics {
    /// Total number of loan records.
    pub total: usize,

    /// Loans with the `returned` flag set.
    pub returned: usize,

    /// Loans still outstanding (`total - returned`).
    pub pending: usize,
}
