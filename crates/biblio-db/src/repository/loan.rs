//! # Loan Repository
//!
//! Database operations for the loan lifecycle.
//!
//! ## Availability State Machine
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │           Book availability transitions                      │
//! │                                                               │
//! │              create(book_id, user)                           │
//! │   ┌───────────┐ ───────────────────► ┌───────────┐           │
//! │   │ Available │                      │   Lent    │           │
//! │   └───────────┘ ◄─────────────────── └───────────┘           │
//! │              delete(loan_id)                                 │
//! │                                                               │
//! │  Both transitions write the loan row AND the book flag in    │
//! │  one transaction. If either write fails, neither persists.   │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Guarded Claim
//! `create` flips the flag with
//! `UPDATE books SET available = 0 WHERE id = ? AND available = 1`.
//! The check and the flip are one statement, so two concurrent creates
//! against the same book can never both succeed: the loser's UPDATE
//! affects zero rows and the loan is rejected.

use chrono::{DateTime, Utc};
use sqlx::prelude::FromRow;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use biblio_core::Loan;

/// Row mapping for the `loans` table.
#[derive(Debug, FromRow)]
struct LoanRow {
    id: i64,
    book_id: i64,
    user_name: String,
    loan_date: DateTime<Utc>,
    returned: bool,
}

impl From<LoanRow> for Loan {
    fn from(row: LoanRow) -> Self {
        Loan {
            id: row.id,
            book_id: row.book_id,
            user_name: row.user_name,
            loan_date: row.loan_date,
            returned: row.returned,
        }
    }
}

/// Repository for loan database operations.
#[derive(Debug, Clone)]
pub struct LoanRepository {
    pool: SqlitePool,
}

impl LoanRepository {
    /// Creates a new LoanRepository.
    pub fn new(pool: SqlitePool) -> Self {
        LoanRepository { pool }
    }

    /// Lists all loans in the store's natural order.
    pub async fn list(&self) -> DbResult<Vec<Loan>> {
        let rows = sqlx::query_as::<_, LoanRow>(
            r#"
            SELECT id, book_id, user_name, loan_date, returned
            FROM loans
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Loan::from).collect())
    }

    /// Gets a loan by ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Loan))` - Loan found
    /// * `Ok(None)` - Loan not found
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Loan>> {
        let row = sqlx::query_as::<_, LoanRow>(
            r#"
            SELECT id, book_id, user_name, loan_date, returned
            FROM loans
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Loan::from))
    }

    /// Creates a loan against an available book.
    ///
    /// ## What This Does (one transaction)
    /// 1. Claims the book: guarded UPDATE flipping `available` 1 → 0
    /// 2. Inserts the loan row (`loan_date = now`, `returned = false`)
    /// 3. Commits; any failure rolls both writes back
    ///
    /// The `user_name` is expected to be normalized (title-cased) already.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - No book with that id
    /// * `Err(DbError::NotAvailable)` - Book exists but is lent out
    pub async fn create(&self, book_id: i64, user_name: &str) -> DbResult<Loan> {
        debug!(book_id = %book_id, "Creating loan");

        let mut tx = self.pool.begin().await?;

        // Check and flip must be one statement. A separate SELECT followed
        // by an UPDATE would let two concurrent creates both observe
        // available = 1 and double-lend the book.
        let claimed = sqlx::query(
            r#"
            UPDATE books SET available = 0
            WHERE id = ?1 AND available = 1
            "#,
        )
        .bind(book_id)
        .execute(&mut *tx)
        .await?;

        if claimed.rows_affected() == 0 {
            // Either the book doesn't exist or it is already lent out.
            // Distinguish for the error message; the transaction rolls
            // back on drop.
            let exists: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books WHERE id = ?1")
                .bind(book_id)
                .fetch_one(&mut *tx)
                .await?;

            return Err(if exists == 0 {
                DbError::not_found("Book", book_id)
            } else {
                DbError::not_available("Book", book_id)
            });
        }

        let loan_date = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO loans (book_id, user_name, loan_date, returned)
            VALUES (?1, ?2, ?3, 0)
            "#,
        )
        .bind(book_id)
        .bind(user_name)
        .bind(loan_date)
        .execute(&mut *tx)
        .await?;

        let id = result.last_insert_rowid();

        tx.commit().await?;

        debug!(id = %id, book_id = %book_id, "Loan created");

        Ok(Loan {
            id,
            book_id,
            user_name: user_name.to_string(),
            loan_date,
            returned: false,
        })
    }

    /// Deletes a loan, returning the book to circulation.
    ///
    /// This is the only return mechanism: the loan row is erased and the
    /// referenced book flips back to available, both in one transaction.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - No loan with that id
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id = %id, "Deleting loan");

        let mut tx = self.pool.begin().await?;

        let row: Option<(i64,)> = sqlx::query_as("SELECT book_id FROM loans WHERE id = ?1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        let Some((book_id,)) = row else {
            return Err(DbError::not_found("Loan", id));
        };

        sqlx::query("DELETE FROM loans WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        // Tolerant update: affects zero rows if the book is gone.
        sqlx::query("UPDATE books SET available = 1 WHERE id = ?1")
            .bind(book_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        debug!(id = %id, book_id = %book_id, "Loan deleted, book available again");

        Ok(())
    }

    /// Counts total loans (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM loans")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::pool::{Database, DbConfig};
    use biblio_core::{NewAuthor, NewBook};

    use super::*;

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    /// Seeds one author and one available book, returning the book id.
    async fn seed_book(db: &Database, isbn: &str) -> i64 {
        let author = db
            .authors()
            .insert(&NewAuthor {
                name: "Seed Author".to_string(),
                nationality: "Unknown".to_string(),
            })
            .await
            .unwrap();

        db.books()
            .insert(&NewBook {
                title: "SEED TITLE".to_string(),
                isbn: isbn.to_string(),
                author_id: author.id,
            })
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn test_create_flips_book_to_unavailable() {
        let db = test_db().await;
        let book_id = seed_book(&db, "ISBN-100").await;

        let loan = db.loans().create(book_id, "Ada Lovelace").await.unwrap();
        assert_eq!(loan.book_id, book_id);
        assert!(!loan.returned);

        let book = db.books().get_by_id(book_id).await.unwrap().unwrap();
        assert!(!book.available);
    }

    #[tokio::test]
    async fn test_create_against_lent_book_is_rejected() {
        let db = test_db().await;
        let book_id = seed_book(&db, "ISBN-101").await;

        db.loans().create(book_id, "First Reader").await.unwrap();

        let err = db.loans().create(book_id, "Second Reader").await.unwrap_err();
        assert!(matches!(err, DbError::NotAvailable { .. }));

        // Rejection must not leave extra loan rows behind.
        assert_eq!(db.loans().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_create_against_missing_book_is_not_found() {
        let db = test_db().await;

        let err = db.loans().create(999, "Reader").await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));

        assert_eq!(db.loans().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_restores_availability() {
        let db = test_db().await;
        let book_id = seed_book(&db, "ISBN-102").await;

        let loan = db.loans().create(book_id, "Reader").await.unwrap();
        db.loans().delete(loan.id).await.unwrap();

        let book = db.books().get_by_id(book_id).await.unwrap().unwrap();
        assert!(book.available);

        assert!(db.loans().get_by_id(loan.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let db = test_db().await;

        let err = db.loans().delete(999).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_listing_excludes_deleted_loan() {
        let db = test_db().await;
        let book_id = seed_book(&db, "ISBN-103").await;

        let loan = db.loans().create(book_id, "Reader").await.unwrap();
        db.loans().delete(loan.id).await.unwrap();

        let loans = db.loans().list().await.unwrap();
        assert!(loans.iter().all(|l| l.id != loan.id));
    }

    #[tokio::test]
    async fn test_concurrent_creates_yield_one_success() {
        let db = test_db().await;
        let book_id = seed_book(&db, "ISBN-104").await;

        let loans_a = db.loans();
        let loans_b = db.loans();

        let (a, b) = tokio::join!(
            loans_a.create(book_id, "Racer One"),
            loans_b.create(book_id, "Racer Two"),
        );

        let successes = [a.is_ok(), b.is_ok()].iter().filter(|ok| **ok).count();
        assert_eq!(successes, 1, "exactly one concurrent loan may win");

        let loser = if a.is_ok() { b } else { a };
        assert!(matches!(loser.unwrap_err(), DbError::NotAvailable { .. }));
    }

    #[tokio::test]
    async fn test_loan_date_round_trips() {
        let db = test_db().await;
        let book_id = seed_book(&db, "ISBN-105").await;

        let created = db.loans().create(book_id, "Reader").await.unwrap();
        let fetched = db.loans().get_by_id(created.id).await.unwrap().unwrap();

        assert_eq!(fetched.loan_date, created.loan_date);
        assert_eq!(fetched.user_name, "Reader");
    }
}
