//! Paged view list handler

use axum::{
    extract::{Query, State},
    Json,
};
use roster_types::{PageResult, PersonView};

use crate::{ApiError, AppState};

use super::PageQueryParams;

/// List persons page by page, sorted, projected to views
///
/// Same pagination and sorting contract as the entity endpoint; the
/// store-assigned identifier is dropped from every record.
#[tracing::instrument(skip(state))]
pub async fn list_views_handler(
    State(state): State<AppState>,
    Query(params): Query<PageQueryParams>,
) -> Result<Json<PageResult<PersonView>>, ApiError> {
    let page = state
        .person_service
        .list_page_views(params.page, params.size, &params.sort_field, &params.sort_direction)
        .await?;

    Ok(Json(page))
}
