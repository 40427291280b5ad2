//! HTTP handlers for the N-th minimum endpoint

use axum::{extract::Query, Json};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::error::AppResult;
use crate::services::MinimumService;

/// Query parameters for finding the N-th minimum
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct FindNthMinimumQuery {
    /// Path to a local Excel file
    pub file_path: String,

    /// Which minimum to find (1-based)
    pub n: i64,
}

/// Find the N-th minimum number from an Excel file
#[utoipa::path(
    get,
    path = "/api/find-nth-min",
    tag = "minimum",
    params(FindNthMinimumQuery),
    responses(
        (status = 200, description = "The N-th minimum value", body = i64),
        (
            status = 400,
            description = "Invalid input or unreadable spreadsheet",
            body = crate::error::ErrorResponse
        )
    )
)]
pub async fn find_nth_minimum(
    Query(query): Query<FindNthMinimumQuery>,
) -> AppResult<Json<i64>> {
    let service = MinimumService::new();
    let result = service.find_nth_minimum(query.file_path, query.n).await?;
    Ok(Json(result))
}
