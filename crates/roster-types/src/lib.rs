//! # Roster Types
//!
//! Shared type definitions for the roster record service.
//!
//! This crate provides all core types used across the roster workspace,
//! ensuring a single source of truth and preventing circular dependencies.

use thiserror::Error;

pub mod filter;
pub mod page;
pub mod person;

pub use filter::PersonFilter;
pub use page::{PageRequest, PageResult, SortDirection, SortField, SortSpec};
pub use person::{Person, PersonView};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
