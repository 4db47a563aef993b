//! # HTTP Routes
//!
//! Resource routing for the catalog API.
//!
//! ## Surface
//! ```text
//! GET    /                          service banner
//! GET    /authors                   200 list
//! POST   /authors                   201 created | 400 blank fields
//! GET    /authors/{id}              200 | 404
//! DELETE /authors/{id}              204 | 404 | 400 has books
//! GET    /books                     200 list
//! POST   /books                     201 created | 400 unknown author / dup isbn
//! GET    /books/{id}                200 | 404
//! DELETE /books/{id}                204 | 404 | 400 has open loan
//! GET    /books/{id}/availability   200 {book_id, available} | 404
//! GET    /loans                     200 list
//! POST   /loans                     201; book becomes unavailable | 400
//! GET    /loans/{id}                200 | 404
//! DELETE /loans/{id}                204; book becomes available | 404
//! GET    /statistics                200 {total, returned, pending}
//! ```

pub mod author;
pub mod book;
pub mod loan;
pub mod stats;

use axum::routing::get;
use axum::{Json, Router};
use tower_http::trace::TraceLayer;

use crate::catalog::CatalogService;

/// Builds the API router over a catalog service.
pub fn create_router(catalog: CatalogService) -> Router {
    Router::new()
        .route("/", get(root))
        .route(
            "/authors",
            get(author::list_authors).post(author::create_author),
        )
        .route(
            "/authors/{id}",
            get(author::get_author).delete(author::delete_author),
        )
        .route("/books", get(book::list_books).post(book::create_book))
        .route("/books/{id}", get(book::get_book).delete(book::delete_book))
        .route("/books/{id}/availability", get(book::check_availability))
        .route("/loans", get(loan::list_loans).post(loan::create_loan))
        .route("/loans/{id}", get(loan::get_loan).delete(loan::delete_loan))
        .route("/statistics", get(stats::get_statistics))
        .layer(TraceLayer::new_for_http())
        .with_state(catalog)
}

/// Service banner.
async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Biblio catalog API running" }))
}
