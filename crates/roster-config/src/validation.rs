//! Configuration validation
//!
//! Catches misconfiguration at startup instead of at first request.

use thiserror::Error;

use crate::Config;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("server.port must not be zero")]
    ZeroPort,

    #[error("store.backend '{0}' is not a known backend")]
    UnknownBackend(String),

    #[error("observability.log_level must not be empty")]
    EmptyLogLevel,
}

const KNOWN_BACKENDS: &[&str] = &["memory"];

impl Config {
    /// Validate the loaded configuration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.server.port == 0 {
            return Err(ValidationError::ZeroPort);
        }

        if !KNOWN_BACKENDS.contains(&self.store.backend.to_lowercase().as_str()) {
            return Err(ValidationError::UnknownBackend(self.store.backend.clone()));
        }

        if self.observability.log_level.trim().is_empty() {
            return Err(ValidationError::EmptyLogLevel);
        }

        Ok(())
    }
}
