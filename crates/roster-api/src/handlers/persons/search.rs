//! Filtered search handler

use axum::{
    extract::{Query, State},
    Json,
};
use roster_types::{PageResult, PersonFilter, PersonView};
use serde::Deserialize;

use crate::{ApiError, AppState};

use super::{default_size, default_sort_direction, default_sort_field};

/// Query parameters for filtered search: pagination and sorting plus the
/// optional match criteria. Absent criteria impose no constraint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterQueryParams {
    #[serde(default)]
    pub page: i64,

    #[serde(default = "default_size")]
    pub size: i64,

    #[serde(default = "default_sort_field")]
    pub sort_field: String,

    #[serde(default = "default_sort_direction")]
    pub sort_direction: String,

    pub number_passport: Option<i32>,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub age: Option<u32>,
    pub sex: Option<String>,
    pub start_age: Option<u32>,
    pub finish_age: Option<u32>,
}

impl FilterQueryParams {
    /// Split off the match criteria for the query builder.
    fn filter(&self) -> PersonFilter {
        PersonFilter {
            number_passport: self.number_passport,
            name: self.name.clone(),
            surname: self.surname.clone(),
            age: self.age,
            sex: self.sex.clone(),
            start_age: self.start_age,
            finish_age: self.finish_age,
        }
    }
}

/// Search persons with filtering, sorting, and pagination
///
/// All supplied criteria must hold (logical AND). Exact-match fields
/// compare case-sensitively; `startAge`/`finishAge` form an inclusive age
/// range. With no criteria supplied, the result is identical to the plain
/// paged view listing. Page totals reflect the filtered count.
///
/// # Query Parameters
/// - `page`, `size`, `sortField`, `sortDirection`: as for `/person/getAllDto`
/// - `numberPassport`, `name`, `surname`, `age`, `sex`: optional exact matches
/// - `startAge`, `finishAge`: optional inclusive age bounds
///
/// # Errors
/// - 400 Bad Request: unknown sort field or direction
/// - 500 Internal Server Error: storage rejected the page bounds or failed
#[tracing::instrument(skip(state))]
pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<FilterQueryParams>,
) -> Result<Json<PageResult<PersonView>>, ApiError> {
    let filter = params.filter();

    let page = state
        .person_service
        .list_page_filtered(
            &filter,
            params.page,
            params.size,
            &params.sort_field,
            &params.sort_direction,
        )
        .await?;

    tracing::debug!(
        total_elements = page.total_elements,
        filtered = !filter.is_empty(),
        "Search completed"
    );

    Ok(Json(page))
}
