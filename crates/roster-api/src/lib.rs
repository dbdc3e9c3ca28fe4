//! # Roster API - REST API Layer
//!
//! Exposes the `/person` REST endpoints for record creation, listing,
//! pagination, and filtered search.

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use roster_config::Config;
use serde::Serialize;
use thiserror::Error;
use tower_http::{compression::CompressionLayer, cors::CorsLayer};
use tracing::info;

pub mod handlers;
pub mod health;
pub mod services;

use handlers::persons::{
    create_batch::create_batch_handler, list::list_all_handler, pages::list_pages_handler,
    search::search_handler, views::list_views_handler,
};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ErrorResponse { error: self.to_string() })).into_response()
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn roster_store::PersonStore>,
    pub config: Arc<Config>,
    pub health_tracker: Arc<health::HealthTracker>,

    // Service layer (protocol-agnostic business logic)
    pub person_service: Arc<services::PersonService>,
}

impl AppState {
    /// Creates a new AppState with services.
    ///
    /// The sample-record generator seeds itself from `config.sample.seed`
    /// when one is set, so batch creation can be made deterministic.
    pub fn new(store: Arc<dyn roster_store::PersonStore>, config: Arc<Config>) -> Self {
        let health_tracker = Arc::new(health::HealthTracker::new());

        let person_service = Arc::new(match config.sample.seed {
            Some(seed) => services::PersonService::with_seed(Arc::clone(&store), seed),
            None => services::PersonService::new(Arc::clone(&store)),
        });

        Self { store, config, health_tracker, person_service }
    }
}

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/health", get(health::health_check_handler))
        .route("/health/live", get(health::liveness_handler))
        .route("/health/ready", get(health::readiness_handler))
        // Person record routes
        .route("/person/create-count/{count}", get(create_batch_handler))
        .route("/person/getAll", get(list_all_handler))
        .route("/person/getAllPages", get(list_pages_handler))
        .route("/person/getAllDto", get(list_views_handler))
        .route("/person/getAll-filter", get(search_handler))
        .with_state(state);

    router
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        .layer(CompressionLayer::new())
}

/// Graceful shutdown signal handler
///
/// Waits for SIGTERM (Kubernetes) or SIGINT (Ctrl+C) and initiates graceful shutdown.
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }

    info!("Shutdown signal received, draining connections...");
}

/// Start the REST API server
pub async fn serve(
    store: Arc<dyn roster_store::PersonStore>,
    config: Arc<Config>,
) -> anyhow::Result<()> {
    let state = AppState::new(store, config.clone());

    // Mark service as ready to accept traffic
    state.health_tracker.set_ready(true);
    state.health_tracker.set_startup_complete(true);

    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Starting REST API server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use roster_store::MemoryBackend;

    pub fn create_test_state() -> AppState {
        let store: Arc<dyn roster_store::PersonStore> = Arc::new(MemoryBackend::new());
        let mut config = Config::default();
        // Fixed seed so batch-creation tests are reproducible
        config.sample.seed = Some(42);
        let state = AppState::new(store, Arc::new(config));

        state.health_tracker.set_ready(true);
        state.health_tracker.set_startup_complete(true);

        state
    }
}
