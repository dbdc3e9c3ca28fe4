//! Health check endpoints for Kubernetes probes
//!
//! Provides liveness and readiness probes plus a storage-backed health
//! check for container orchestration.

use std::{
    sync::{
        atomic::{AtomicBool, AtomicU64, Ordering},
        Arc,
    },
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use roster_store::PersonStore;
use serde::{Deserialize, Serialize};

use crate::AppState;

/// Health check status
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Service is healthy
    Healthy,
    /// Service is unhealthy
    Unhealthy,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall health status
    pub status: HealthStatus,
    /// Service name
    pub service: String,
    /// Service version
    pub version: String,
    /// Uptime in seconds
    pub uptime_seconds: u64,
    /// Storage backend status
    pub storage: ComponentStatus,
}

/// Component health status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentStatus {
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Health tracker for the service
#[derive(Clone)]
pub struct HealthTracker {
    /// Service start time
    start_time: Arc<AtomicU64>,
    /// Is service ready?
    ready: Arc<AtomicBool>,
    /// Has service completed startup?
    startup_complete: Arc<AtomicBool>,
}

impl Default for HealthTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthTracker {
    pub fn new() -> Self {
        let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_secs();

        Self {
            start_time: Arc::new(AtomicU64::new(now)),
            ready: Arc::new(AtomicBool::new(false)),
            startup_complete: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_secs();
        let start = self.start_time.load(Ordering::Relaxed);
        now.saturating_sub(start)
    }

    pub fn set_ready(&self, ready: bool) {
        self.ready.store(ready, Ordering::Release);
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    pub fn set_startup_complete(&self, complete: bool) {
        self.startup_complete.store(complete, Ordering::Release);
    }

    pub fn is_startup_complete(&self) -> bool {
        self.startup_complete.load(Ordering::Acquire)
    }
}

/// Full health check, including a storage round trip
pub async fn health_check_handler(State(state): State<AppState>) -> impl IntoResponse {
    let storage =
        match tokio::time::timeout(Duration::from_secs(1), state.store.count()).await {
            Ok(Ok(_)) => ComponentStatus {
                status: HealthStatus::Healthy,
                message: Some("Storage operational".to_string()),
            },
            Ok(Err(e)) => ComponentStatus {
                status: HealthStatus::Unhealthy,
                message: Some(format!("Storage error: {}", e)),
            },
            Err(_) => ComponentStatus {
                status: HealthStatus::Unhealthy,
                message: Some("Storage timed out".to_string()),
            },
        };

    let status = storage.status.clone();
    let code = match status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    let response = HealthResponse {
        status,
        service: "roster".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.health_tracker.uptime_seconds(),
        storage,
    };

    (code, Json(response))
}

/// Liveness probe: the process is up and serving
pub async fn liveness_handler() -> impl IntoResponse {
    StatusCode::OK
}

/// Readiness probe: the service accepts traffic
pub async fn readiness_handler(State(state): State<AppState>) -> impl IntoResponse {
    if state.health_tracker.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_starts_not_ready() {
        let tracker = HealthTracker::new();
        assert!(!tracker.is_ready());
        assert!(!tracker.is_startup_complete());
    }

    #[test]
    fn test_tracker_ready_toggles() {
        let tracker = HealthTracker::new();
        tracker.set_ready(true);
        assert!(tracker.is_ready());
        tracker.set_ready(false);
        assert!(!tracker.is_ready());
    }

    #[test]
    fn test_uptime_is_monotonic() {
        let tracker = HealthTracker::new();
        assert!(tracker.uptime_seconds() < 5);
    }
}
