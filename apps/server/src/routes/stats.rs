//! # Statistics Handler

use axum::extract::State;
use axum::Json;

use biblio_core::LoanStatistics;

use crate::catalog::CatalogService;
use crate::error::ApiError;

/// `GET /statistics`
///
/// Loan counts by status. Under delete-on-return, `returned` is
/// structurally 0 for live data; the field is kept so the response shape
/// is stable if the lifecycle ever retains returned rows.
pub async fn get_statistics(
    State(catalog): State<CatalogService>,
) -> Result<Json<LoanStatistics>, ApiError> {
    Ok(Json(catalog.statistics().await?))
}
