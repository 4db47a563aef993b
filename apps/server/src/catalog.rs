//! # Catalog Service
//!
//! Orchestrates create/read/delete operations across authors, books, and
//! loans, enforcing the cross-entity invariants:
//!
//! - an author must exist before a book referencing it is created
//! - a book must be available before a loan is created against it
//! - availability flips on loan create/delete, transactionally
//!
//! The `Database` handle is constructor-injected; the service holds no
//! other state. Validation and transforms come from biblio-core and are
//! applied exactly once per create.

use tracing::info;

use biblio_core::validation::{title_case, transform_book_input, validate_author};
use biblio_core::{
    compute_loan_statistics, Author, Book, CoreError, Loan, LoanStatistics, NewAuthor, NewLoan,
};
use biblio_db::{Database, DbError};

use crate::error::ApiError;

/// The catalog service.
///
/// Cloning is cheap: the only field is the pooled database handle.
#[derive(Debug, Clone)]
pub struct CatalogService {
    db: Database,
}

impl CatalogService {
    /// Creates a catalog service over the given database.
    pub fn new(db: Database) -> Self {
        CatalogService { db }
    }

    // =========================================================================
    // Author Operations
    // =========================================================================

    /// Returns all authors.
    pub async fn list_authors(&self) -> Result<Vec<Author>, ApiError> {
        Ok(self.db.authors().list().await?)
    }

    /// Returns the author with the given id.
    pub async fn get_author(&self, id: i64) -> Result<Author, ApiError> {
        self.db
            .authors()
            .get_by_id(id)
            .await?
            .ok_or_else(|| ApiError::not_found("Author", id))
    }

    /// Creates an author.
    ///
    /// ## What This Does
    /// 1. Validates that name and nationality are non-blank
    /// 2. Title-cases both fields
    /// 3. Persists and returns the record with its assigned id
    pub async fn create_author(&self, input: NewAuthor) -> Result<Author, ApiError> {
        validate_author(&input).map_err(CoreError::Validation)?;

        let normalized = NewAuthor {
            name: title_case(&input.name),
            nationality: title_case(&input.nationality),
        };

        let author = self.db.authors().insert(&normalized).await?;
        info!(id = %author.id, "Author created");
        Ok(author)
    }

    /// Deletes an author.
    ///
    /// Fails with NotFound if absent, and with a validation error if the
    /// author still has books (foreign key enforcement in the store).
    pub async fn delete_author(&self, id: i64) -> Result<(), ApiError> {
        self.db.authors().delete(id).await?;
        info!(id = %id, "Author deleted");
        Ok(())
    }

    // =========================================================================
    // Book Operations
    // =========================================================================

    /// Returns all books.
    pub async fn list_books(&self) -> Result<Vec<Book>, ApiError> {
        Ok(self.db.books().list().await?)
    }

    /// Returns the book with the given id.
    pub async fn get_book(&self, id: i64) -> Result<Book, ApiError> {
        self.db
            .books()
            .get_by_id(id)
            .await?
            .ok_or_else(|| ApiError::not_found("Book", id))
    }

    /// Creates a book.
    ///
    /// ## What This Does
    /// 1. Rejects unknown `author_id` with a validation error (400, per
    ///    the API contract; this is bad input, not a missing resource)
    /// 2. Applies the title/isbn transform exactly once
    /// 3. Persists with `available = true`
    ///
    /// A duplicate isbn surfaces as a validation error via the store's
    /// unique constraint.
    pub async fn create_book(
        &self,
        title: &str,
        isbn: &str,
        author_id: i64,
    ) -> Result<Book, ApiError> {
        if !self.db.authors().exists(author_id).await? {
            return Err(ApiError::validation(
                CoreError::AuthorNotFound(author_id).to_string(),
            ));
        }

        let input = transform_book_input(title, isbn, author_id);

        let book = self.db.books().insert(&input).await?;
        info!(id = %book.id, isbn = %book.isbn, "Book created");
        Ok(book)
    }

    /// Deletes a book.
    ///
    /// Fails with NotFound if absent, and with a validation error if an
    /// open loan still references it.
    pub async fn delete_book(&self, id: i64) -> Result<(), ApiError> {
        self.db.books().delete(id).await?;
        info!(id = %id, "Book deleted");
        Ok(())
    }

    /// Returns the availability flag of a book.
    pub async fn check_availability(&self, id: i64) -> Result<bool, ApiError> {
        Ok(self.get_book(id).await?.available)
    }

    // =========================================================================
    // Loan Operations
    // =========================================================================

    /// Returns all loans.
    pub async fn list_loans(&self) -> Result<Vec<Loan>, ApiError> {
        Ok(self.db.loans().list().await?)
    }

    /// Returns the loan with the given id.
    pub async fn get_loan(&self, id: i64) -> Result<Loan, ApiError> {
        self.db
            .loans()
            .get_by_id(id)
            .await?
            .ok_or_else(|| ApiError::not_found("Loan", id))
    }

    /// Creates a loan against an available book.
    ///
    /// The availability check and flip happen inside one transaction in
    /// the repository, so concurrent creates against the same book yield
    /// exactly one success. Both failure modes (unknown book, book lent
    /// out) are client errors on the creation input, hence 400.
    pub async fn create_loan(&self, input: NewLoan) -> Result<Loan, ApiError> {
        let user_name = title_case(&input.user_name);

        let loan = self
            .db
            .loans()
            .create(input.book_id, &user_name)
            .await
            .map_err(|err| match err {
                DbError::NotFound { .. } => {
                    ApiError::validation(CoreError::BookNotFound(input.book_id).to_string())
                }
                DbError::NotAvailable { .. } => {
                    ApiError::validation(CoreError::BookNotAvailable(input.book_id).to_string())
                }
                other => other.into(),
            })?;

        info!(id = %loan.id, book_id = %loan.book_id, "Loan created");
        Ok(loan)
    }

    /// Deletes a loan, returning the book to circulation.
    ///
    /// This is the only return mechanism: the loan row is erased (history
    /// discarded) and the book flips back to available in the same
    /// transaction.
    pub async fn delete_loan(&self, id: i64) -> Result<(), ApiError> {
        self.db.loans().delete(id).await?;
        info!(id = %id, "Loan deleted, book returned");
        Ok(())
    }

    // =========================================================================
    // Statistics
    // =========================================================================

    /// Computes loan counts by status over all loans.
    pub async fn statistics(&self) -> Result<LoanStatistics, ApiError> {
        let loans = self.db.loans().list().await?;
        Ok(compute_loan_statistics(&loans))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
