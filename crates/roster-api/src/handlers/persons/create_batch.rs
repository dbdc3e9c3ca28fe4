//! Random batch creation handler

use axum::extract::{Path, State};

use crate::{ApiError, AppState};

/// Create `count` random person records
///
/// Each record is generated from the service's injected random source and
/// persisted as an independent insert.
///
/// # Path Parameters
/// - `count`: number of records to create (unsigned; non-numeric values
///   are rejected at the transport boundary)
///
/// # Response (200 OK)
/// Plain text confirmation, e.g. `Created 25 person records`.
///
/// # Errors
/// - 500 Internal Server Error: a storage insert failed (records created
///   before the failure remain)
#[tracing::instrument(skip(state))]
pub async fn create_batch_handler(
    State(state): State<AppState>,
    Path(count): Path<u32>,
) -> Result<String, ApiError> {
    let message = state.person_service.create_random_batch(count).await?;

    tracing::info!(count, "Batch creation completed");

    Ok(message)
}

#[cfg(test)]
mod tests {
    use roster_store::PersonStore;

    use super::*;
    use crate::test_support::create_test_state;

    #[tokio::test]
    async fn test_create_batch_returns_confirmation() {
        let state = create_test_state();

        let message =
            create_batch_handler(State(state.clone()), Path(5)).await.unwrap();

        assert_eq!(message, "Created 5 person records");
        assert_eq!(state.store.count().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_create_batch_zero_creates_nothing() {
        let state = create_test_state();

        let message = create_batch_handler(State(state.clone()), Path(0)).await.unwrap();

        assert_eq!(message, "Created 0 person records");
        assert_eq!(state.store.count().await.unwrap(), 0);
    }
}
