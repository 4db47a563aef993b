//! # Loan Handlers
//!
//! HTTP handlers for the `/loans` resource. Creating a loan makes the
//! book unavailable; deleting it (the return mechanism) makes the book
//! available again.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use biblio_core::{Loan, NewLoan};

use crate::catalog::CatalogService;
use crate::error::ApiError;

/// `GET /loans`
pub async fn list_loans(
    State(catalog): State<CatalogService>,
) -> Result<Json<Vec<Loan>>, ApiError> {
    Ok(Json(catalog.list_loans().await?))
}

/// `GET /loans/{id}`
pub async fn get_loan(
    State(catalog): State<CatalogService>,
    Path(id): Path<i64>,
) -> Result<Json<Loan>, ApiError> {
    Ok(Json(catalog.get_loan(id).await?))
}

/// `POST /loans`
///
/// 201 with the created record; the book becomes unavailable in the same
/// transaction. 400 if the book is unknown or already lent out.
pub async fn create_loan(
    State(catalog): State<CatalogService>,
    Json(input): Json<NewLoan>,
) -> Result<(StatusCode, Json<Loan>), ApiError> {
    let loan = catalog.create_loan(input).await?;
    Ok((StatusCode::CREATED, Json(loan)))
}

/// `DELETE /loans/{id}`
///
/// 204 on success; the book becomes available again. 404 if absent.
pub async fn delete_loan(
    State(catalog): State<CatalogService>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    catalog.delete_loan(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
