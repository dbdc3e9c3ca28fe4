//! Paged entity list handler

use axum::{
    extract::{Query, State},
    Json,
};
use roster_types::{PageResult, Person};

use crate::{ApiError, AppState};

use super::PageQueryParams;

/// List persons page by page, sorted, in entity shape
///
/// Unlike the view endpoints this one includes the store-assigned `id` in
/// each record.
///
/// # Query Parameters
/// - `page` (default 0): 0-based page index
/// - `size` (default 10): page size
/// - `sortField` (default `numberPassport`): field to sort by
/// - `sortDirection` (default `asc`): `asc` or `desc`, case-insensitive
///
/// # Errors
/// - 400 Bad Request: unknown sort field or direction
/// - 500 Internal Server Error: storage rejected the page bounds or failed
#[tracing::instrument(skip(state))]
pub async fn list_pages_handler(
    State(state): State<AppState>,
    Query(params): Query<PageQueryParams>,
) -> Result<Json<PageResult<Person>>, ApiError> {
    let page = state
        .person_service
        .list_page(params.page, params.size, &params.sort_field, &params.sort_direction)
        .await?;

    Ok(Json(page))
}
