//! # biblio-server: HTTP API for the Biblio Catalog
//!
//! ## Request Flow
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      Request Flow                            │
//! │                                                              │
//! │  HTTP request (JSON body)                                    │
//! │       │                                                      │
//! │       ▼                                                      │
//! │  axum handler (routes/)   ← path/body extraction             │
//! │       │                                                      │
//! │       ▼                                                      │
//! │  CatalogService (catalog.rs)                                 │
//! │  ├── validation + transforms (biblio-core)                   │
//! │  └── reads/writes (biblio-db, transactional)                 │
//! │       │                                                      │
//! │       ▼                                                      │
//! │  Domain object → JSON response                               │
//! │  DbError/CoreError → ApiError → status code + error body     │
//! └──────────────────────────────────────────────────────────────┘
//! ```

pub mod catalog;
pub mod error;
pub mod routes;

pub use catalog::CatalogService;
pub use error::ApiError;
pub use routes::create_router;
