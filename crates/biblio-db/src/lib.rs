//! # biblio-db: Database Layer for the Biblio Catalog
//!
//! SQLite access via sqlx for the catalog service.
//!
//! ## Architecture Position
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     Biblio Data Flow                         │
//! │                                                              │
//! │  CatalogService (apps/server)                                │
//! │       │                                                      │
//! │       ▼                                                      │
//! │  ┌────────────────────────────────────────────────────┐     │
//! │  │               biblio-db (THIS CRATE)               │     │
//! │  │                                                    │     │
//! │  │  ┌───────────┐  ┌──────────────┐  ┌────────────┐  │     │
//! │  │  │ Database  │  │ Repositories │  │ Migrations │  │     │
//! │  │  │ (pool.rs) │◄─│ author, book │  │ (embedded) │  │     │
//! │  │  │           │  │ loan         │  │            │  │     │
//! │  │  └───────────┘  └──────────────┘  └────────────┘  │     │
//! │  └────────────────────────────────────────────────────┘     │
//! │       │                                                      │
//! │       ▼                                                      │
//! │  SQLite database file (or :memory: for tests)                │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (author, book, loan)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use biblio_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("biblio.db")).await?;
//! let authors = db.authors().list().await?;
//! ```

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::author::AuthorRepository;
pub use repository::book::BookRepository;
pub use repository::loan::LoanRepository;
