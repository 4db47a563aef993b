//! # Author Handlers
//!
//! HTTP handlers for the `/authors` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use biblio_core::{Author, NewAuthor};

use crate::catalog::CatalogService;
use crate::error::ApiError;

/// `GET /authors`
pub async fn list_authors(
    State(catalog): State<CatalogService>,
) -> Result<Json<Vec<Author>>, ApiError> {
    Ok(Json(catalog.list_authors().await?))
}

/// `GET /authors/{id}`
pub async fn get_author(
    State(catalog): State<CatalogService>,
    Path(id): Path<i64>,
) -> Result<Json<Author>, ApiError> {
    Ok(Json(catalog.get_author(id).await?))
}

/// `POST /authors`
///
/// 201 with the created record; 400 if either field is blank after trim.
pub async fn create_author(
    State(catalog): State<CatalogService>,
    Json(input): Json<NewAuthor>,
) -> Result<(StatusCode, Json<Author>), ApiError> {
    let author = catalog.create_author(input).await?;
    Ok((StatusCode::CREATED, Json(author)))
}

/// `DELETE /authors/{id}`
///
/// 204 on success; 404 if absent; 400 if the author still has books.
pub async fn delete_author(
    State(catalog): State<CatalogService>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    catalog.delete_author(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
