//! # Book Repository
//!
//! Database operations for books.
//!
//! The `available` column is read here but only ever written by the loan
//! repository, inside the same transaction that creates or deletes the
//! loan row. Books are inserted with `available = 1`.

use sqlx::prelude::FromRow;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use biblio_core::{Book, NewBook};

/// Row mapping for the `books` table.
#[derive(Debug, FromRow)]
struct BookRow {
    id: i64,
    title: String,
    isbn: String,
    author_id: i64,
    available: bool,
}

impl From<BookRow> for Book {
    fn from(row: BookRow) -> Self {
        Book {
            id: row.id,
            title: row.title,
            isbn: row.isbn,
            author_id: row.author_id,
            available: row.available,
        }
    }
}

/// Repository for book database operations.
#[derive(Debug, Clone)]
pub struct BookRepository {
    pool: SqlitePool,
}

impl BookRepository {
    /// Creates a new BookRepository.
    pub fn new(pool: SqlitePool) -> Self {
        BookRepository { pool }
    }

    /// Lists all books in the store's natural order.
    pub async fn list(&self) -> DbResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT id, title, isbn, author_id, available
            FROM books
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Book::from).collect())
    }

    /// Gets a book by ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Book))` - Book found
    /// * `Ok(None)` - Book not found
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Book>> {
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT id, title, isbn, author_id, available
            FROM books
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Book::from))
    }

    /// Inserts a new book and returns it with the assigned id.
    ///
    /// The input is expected to be transformed already (upper-cased title,
    /// prefixed isbn). New books are always available.
    ///
    /// ## Returns
    /// * `Err(DbError::UniqueViolation)` - isbn already exists
    /// * `Err(DbError::ForeignKeyViolation)` - author_id unknown
    pub async fn insert(&self, input: &NewBook) -> DbResult<Book> {
        debug!(isbn = %input.isbn, author_id = %input.author_id, "Inserting book");

        let result = sqlx::query(
            r#"
            INSERT INTO books (title, isbn, author_id, available)
            VALUES (?1, ?2, ?3, 1)
            "#,
        )
        .bind(&input.title)
        .bind(&input.isbn)
        .bind(input.author_id)
        .execute(&self.pool)
        .await?;

        Ok(Book {
            id: result.last_insert_rowid(),
            title: input.title.clone(),
            isbn: input.isbn.clone(),
            author_id: input.author_id,
            available: true,
        })
    }

    /// Deletes a book.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - No book with that id
    /// * `Err(DbError::ForeignKeyViolation)` - Book still has a loan
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id = %id, "Deleting book");

        let result = sqlx::query("DELETE FROM books WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Book", id));
        }

        Ok(())
    }

    /// Counts total books (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
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

    async fn seed_author(db: &Database) -> i64 {
        db.authors()
            .insert(&NewAuthor {
                name: "Seed Author".to_string(),
                nationality: "Unknown".to_string(),
            })
            .await
            .unwrap()
            .id
    }

    fn new_book(isbn: &str, author_id: i64) -> NewBook {
        NewBook {
            title: "SOME TITLE".to_string(),
            isbn: isbn.to_string(),
            author_id,
        }
    }

    #[tokio::test]
    async fn test_insert_defaults_to_available() {
        let db = test_db().await;
        let author_id = seed_author(&db).await;

        let book = db
            .books()
            .insert(&new_book("ISBN-111", author_id))
            .await
            .unwrap();

        assert!(book.available);
        let fetched = db.books().get_by_id(book.id).await.unwrap().unwrap();
        assert_eq!(fetched, book);
    }

    #[tokio::test]
    async fn test_duplicate_isbn_is_rejected() {
        let db = test_db().await;
        let author_id = seed_author(&db).await;

        db.books()
            .insert(&new_book("ISBN-222", author_id))
            .await
            .unwrap();

        let err = db
            .books()
            .insert(&new_book("ISBN-222", author_id))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::UniqueViolation { .. }));
    }

    #[tokio::test]
    async fn test_unknown_author_violates_foreign_key() {
        let db = test_db().await;

        let err = db.books().insert(&new_book("ISBN-333", 999)).await.unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));
    }

    #[tokio::test]
    async fn test_delete_author_with_books_is_rejected() {
        let db = test_db().await;
        let author_id = seed_author(&db).await;
        db.books()
            .insert(&new_book("ISBN-444", author_id))
            .await
            .unwrap();

        let err = db.authors().delete(author_id).await.unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let db = test_db().await;

        let err = db.books().delete(999).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }
}
