//! # Book Handlers
//!
//! HTTP handlers for the `/books` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use biblio_core::Book;

use crate::catalog::CatalogService;
use crate::error::ApiError;

/// Request body for `POST /books`. Raw client values; the title/isbn
/// transform is applied by the service, never by the caller.
#[derive(Debug, Deserialize)]
pub struct CreateBookRequest {
    pub title: String,
    pub isbn: String,
    pub author_id: i64,
}

/// Response body for `GET /books/{id}/availability`.
#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub book_id: i64,
    pub available: bool,
}

/// `GET /books`
pub async fn list_books(
    State(catalog): State<CatalogService>,
) -> Result<Json<Vec<Book>>, ApiError> {
    Ok(Json(catalog.list_books().await?))
}

/// `GET /books/{id}`
pub async fn get_book(
    State(catalog): State<CatalogService>,
    Path(id): Path<i64>,
) -> Result<Json<Book>, ApiError> {
    Ok(Json(catalog.get_book(id).await?))
}

/// `POST /books`
///
/// 201 with the created record (title upper-cased, isbn prefixed);
/// 400 if `author_id` is unknown or the isbn already exists.
pub async fn create_book(
    State(catalog): State<CatalogService>,
    Json(input): Json<CreateBookRequest>,
) -> Result<(StatusCode, Json<Book>), ApiError> {
    let book = catalog
        .create_book(&input.title, &input.isbn, input.author_id)
        .await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// `DELETE /books/{id}`
///
/// 204 on success; 404 if absent; 400 if an open loan references it.
pub async fn delete_book(
    State(catalog): State<CatalogService>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    catalog.delete_book(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /books/{id}/availability`
pub async fn check_availability(
    State(catalog): State<CatalogService>,
    Path(id): Path<i64>,
) -> Result<Json<AvailabilityResponse>, ApiError> {
    let available = catalog.check_availability(id).await?;
    Ok(Json(AvailabilityResponse {
        book_id: id,
        available,
    }))
}
