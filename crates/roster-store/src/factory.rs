//! Storage factory for creating backend instances
//!
//! Provides a flexible way to instantiate storage backends without
//! exposing implementation details to consumers.

use std::str::FromStr;
use std::sync::Arc;

use roster_types::StoreError;

use crate::memory::MemoryBackend;
use crate::{PersonStore, Result};

/// Storage backend type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendType {
    /// In-memory storage (for testing and development)
    Memory,
}

impl FromStr for BackendType {
    type Err = StoreError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" => Ok(BackendType::Memory),
            _ => Err(StoreError::Internal(format!("Unknown backend type: {}", s))),
        }
    }
}

impl BackendType {
    /// Get the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendType::Memory => "memory",
        }
    }
}

/// Configuration for storage backend
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Backend type to use
    pub backend: BackendType,
    /// Optional connection string (for database backends)
    pub connection_string: Option<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { backend: BackendType::Memory, connection_string: None }
    }
}

impl StorageConfig {
    /// Create config for memory backend
    pub fn memory() -> Self {
        Self { backend: BackendType::Memory, connection_string: None }
    }
}

/// Storage factory for creating backend instances
pub struct StorageFactory;

impl StorageFactory {
    /// Create a storage backend from configuration
    pub async fn create(config: StorageConfig) -> Result<Arc<dyn PersonStore>> {
        match config.backend {
            BackendType::Memory => Ok(Arc::new(MemoryBackend::new()) as Arc<dyn PersonStore>),
        }
    }

    /// Create a storage backend from string configuration
    pub async fn from_str(
        backend_str: &str,
        connection_string: Option<String>,
    ) -> Result<Arc<dyn PersonStore>> {
        let backend_type = BackendType::from_str(backend_str)?;
        let config = StorageConfig { backend: backend_type, connection_string };
        Self::create(config).await
    }

    /// Create default memory backend
    pub fn memory() -> Arc<dyn PersonStore> {
        Arc::new(MemoryBackend::new()) as Arc<dyn PersonStore>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_type_from_str() {
        assert_eq!(BackendType::from_str("memory").unwrap(), BackendType::Memory);
        assert_eq!(BackendType::from_str("Memory").unwrap(), BackendType::Memory);
        assert_eq!(BackendType::from_str("MEMORY").unwrap(), BackendType::Memory);
        assert!(BackendType::from_str("postgres").is_err());
    }

    #[test]
    fn test_backend_type_as_str() {
        assert_eq!(BackendType::Memory.as_str(), "memory");
    }

    #[tokio::test]
    async fn test_factory_create_memory() {
        let config = StorageConfig::memory();
        let store = StorageFactory::create(config).await.unwrap();

        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_factory_from_str_memory() {
        let store = StorageFactory::from_str("memory", None).await.unwrap();

        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_factory_from_str_unknown_backend() {
        let result = StorageFactory::from_str("foundationdb", None).await;
        assert!(result.is_err());
    }
}
