//! Unpaged list handler

use axum::{extract::State, Json};
use roster_types::PersonView;

use crate::{ApiError, AppState};

/// List every person record, unfiltered and unpaged
///
/// Records come back in store-native order with no ordering guarantee.
/// Identifiers are not exposed in the view shape.
///
/// # Response (200 OK)
/// ```json
/// [
///   {
///     "numberPassport": 42417,
///     "name": "Alice",
///     "surname": "Johnson",
///     "age": 34,
///     "sex": "Female"
///   }
/// ]
/// ```
///
/// # Errors
/// - 500 Internal Server Error: storage operation failed
#[tracing::instrument(skip(state))]
pub async fn list_all_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<PersonView>>, ApiError> {
    let views = state.person_service.list_all().await?;

    tracing::debug!(count = views.len(), "Listed all persons");

    Ok(Json(views))
}
