//! # Repository Module
//!
//! Database repository implementations for the Biblio catalog.
//!
//! ## Repository Pattern
//! ```text
//! CatalogService
//!      │
//!      │  db.books().get_by_id(7)
//!      ▼
//! BookRepository
//! ├── list(&self)
//! ├── get_by_id(&self, id)
//! ├── insert(&self, book)
//! └── delete(&self, id)
//!      │
//!      │  SQL Query
//!      ▼
//! SQLite Database
//! ```
//!
//! SQL is isolated here; the service layer never sees a row, only domain
//! types from biblio-core.
//!
//! ## Available Repositories
//!
//! - [`author::AuthorRepository`] - Author CRUD
//! - [`book::BookRepository`] - Book CRUD and availability reads
//! - [`loan::LoanRepository`] - Loan lifecycle with transactional
//!   availability flips

pub mod author;
pub mod book;
pub mod loan;
