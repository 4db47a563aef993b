//! # biblio-core: Pure Business Logic for the Biblio Catalog
//!
//! This crate is the heart of the catalog service. It contains every
//! business rule as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    Biblio Architecture                       │
//! │                                                              │
//! │  HTTP request (axum handler)                                 │
//! │       │                                                      │
//! │       ▼                                                      │
//! │  CatalogService (apps/server)                                │
//! │       │                                                      │
//! │       ▼                                                      │
//! │  ┌────────────────────────────────────────────────────┐     │
//! │  │             ★ biblio-core (THIS CRATE) ★           │     │
//! │  │                                                    │     │
//! │  │   ┌─────────┐  ┌────────────┐  ┌─────────┐        │     │
//! │  │   │  types  │  │ validation │  │  stats  │        │     │
//! │  │   │ Author  │  │   rules    │  │  loan   │        │     │
//! │  │   │  Book   │  │ transforms │  │ counts  │        │     │
//! │  │   │  Loan   │  └────────────┘  └─────────┘        │     │
//! │  │   └─────────┘                                     │     │
//! │  │                                                    │     │
//! │  │   NO I/O • NO DATABASE • NO NETWORK                │     │
//! │  └────────────────────────────────────────────────────┘     │
//! │       │                                                      │
//! │       ▼                                                      │
//! │  biblio-db (SQLite queries, migrations, repositories)        │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Author, Book, Loan, LoanStatistics)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation and creation-time transforms
//! - [`stats`] - Loan statistics aggregation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, always
//! 2. **No I/O**: database, network, file system access is FORBIDDEN here
//! 3. **Explicit Errors**: all errors are typed, never strings or panics

pub mod error;
pub mod stats;
pub mod types;
pub mod validation;

pub use error::{CoreError, ValidationError};
pub use stats::compute_loan_statistics;
pub use types::*;
