//! # Author Repository
//!
//! Database operations for authors.

use sqlx::prelude::FromRow;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use biblio_core::{Author, NewAuthor};

/// Row mapping for the `authors` table.
#[derive(Debug, FromRow)]
struct AuthorRow {
    id: i64,
    name: String,
    nationality: String,
}

impl From<AuthorRow> for Author {
    fn from(row: AuthorRow) -> Self {
        Author {
            id: row.id,
            name: row.name,
            nationality: row.nationality,
        }
    }
}

/// Repository for author database operations.
#[derive(Debug, Clone)]
pub struct AuthorRepository {
    pool: SqlitePool,
}

impl AuthorRepository {
    /// Creates a new AuthorRepository.
    pub fn new(pool: SqlitePool) -> Self {
        AuthorRepository { pool }
    }

    /// Lists all authors in the store's natural order.
    pub async fn list(&self) -> DbResult<Vec<Author>> {
        let rows = sqlx::query_as::<_, AuthorRow>(
            r#"
            SELECT id, name, nationality
            FROM authors
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Author::from).collect())
    }

    /// Gets an author by ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Author))` - Author found
    /// * `Ok(None)` - Author not found
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Author>> {
        let row = sqlx::query_as::<_, AuthorRow>(
            r#"
            SELECT id, name, nationality
            FROM authors
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Author::from))
    }

    /// Checks whether an author exists.
    ///
    /// Used by book creation to reject unknown author references with a
    /// clean message before the FK constraint would fire.
    pub async fn exists(&self, id: i64) -> DbResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM authors WHERE id = ?1")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    /// Inserts a new author and returns it with the assigned id.
    ///
    /// The input is expected to be validated and normalized already
    /// (title-cased name and nationality).
    pub async fn insert(&self, input: &NewAuthor) -> DbResult<Author> {
        debug!(name = %input.name, "Inserting author");

        let result = sqlx::query(
            r#"
            INSERT INTO authors (name, nationality)
            VALUES (?1, ?2)
            "#,
        )
        .bind(&input.name)
        .bind(&input.nationality)
        .execute(&self.pool)
        .await?;

        Ok(Author {
            id: result.last_insert_rowid(),
            name: input.name.clone(),
            nationality: input.nationality.clone(),
        })
    }

    /// Deletes an author.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - No author with that id
    /// * `Err(DbError::ForeignKeyViolation)` - Author still has books
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id = %id, "Deleting author");

        let result = sqlx::query("DELETE FROM authors WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Author", id));
        }

        Ok(())
    }

    /// Counts total authors (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM authors")
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
    use biblio_core::NewAuthor;

    use super::*;

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn new_author(name: &str, nationality: &str) -> NewAuthor {
        NewAuthor {
            name: name.to_string(),
            nationality: nationality.to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let db = test_db().await;
        let repo = db.authors();

        let author = repo
            .insert(&new_author("Jorge Luis Borges", "Argentine"))
            .await
            .unwrap();
        assert!(author.id > 0);

        let fetched = repo.get_by_id(author.id).await.unwrap().unwrap();
        assert_eq!(fetched, author);
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let db = test_db().await;
        assert!(db.authors().get_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_returns_all() {
        let db = test_db().await;
        let repo = db.authors();

        repo.insert(&new_author("Author One", "Chilean")).await.unwrap();
        repo.insert(&new_author("Author Two", "Mexican")).await.unwrap();

        let authors = repo.list().await.unwrap();
        assert_eq!(authors.len(), 2);
    }

    #[tokio::test]
    async fn test_delete() {
        let db = test_db().await;
        let repo = db.authors();

        let author = repo.insert(&new_author("Ephemeral", "Unknown")).await.unwrap();
        repo.delete(author.id).await.unwrap();

        assert!(repo.get_by_id(author.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let db = test_db().await;

        let err = db.authors().delete(999).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_exists() {
        let db = test_db().await;
        let repo = db.authors();

        let author = repo.insert(&new_author("Present", "Unknown")).await.unwrap();
        assert!(repo.exists(author.id).await.unwrap());
        assert!(!repo.exists(author.id + 1).await.unwrap());
    }
}
