//! # Roster Observe - Observability Layer
//!
//! Centralized structured logging setup for the roster service.

pub mod logging;

pub use logging::{init_logging, LogConfig, LogFormat};

/// Initialize the observability stack with defaults.
pub fn init() -> anyhow::Result<()> {
    init_logging(LogConfig::default())
}

/// Initialize the observability stack with an explicit filter directive
/// (e.g. `"info"` or `"info,roster=debug"`).
pub fn init_with_filter(filter: &str) -> anyhow::Result<()> {
    init_logging(LogConfig { filter: Some(filter.to_string()), ..LogConfig::default() })
}
