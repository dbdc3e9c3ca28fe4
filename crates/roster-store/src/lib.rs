//! # Roster Store - Storage Abstraction Layer
//!
//! Provides the abstract person-store interface and its backends. The
//! interface mirrors what a relational store offers this service: single
//! inserts with store-assigned ids, unpaged listing in native order, and
//! sorted/paged retrieval with optional filtering.

use async_trait::async_trait;
use roster_types::{PageRequest, PageResult, Person, PersonFilter, PersonView, SortSpec, StoreResult};

pub mod factory;
pub mod memory;

pub use factory::{BackendType, StorageConfig, StorageFactory};
pub use memory::MemoryBackend;

type Result<T> = StoreResult<T>;

/// The abstract person store interface
#[async_trait]
pub trait PersonStore: Send + Sync {
    /// Persist a new record, assigning its identifier.
    ///
    /// No uniqueness constraint applies to `number_passport`.
    async fn insert(&self, record: PersonView) -> Result<Person>;

    /// All records, unpaged, in store-native order.
    async fn list(&self) -> Result<Vec<Person>>;

    /// One sorted page of all records.
    ///
    /// Negative bounds and a zero size are rejected with the backend's
    /// native error.
    async fn list_page(&self, request: PageRequest, sort: SortSpec) -> Result<PageResult<Person>>;

    /// One sorted page restricted to records matching the filter.
    ///
    /// Totals reflect the filtered count, not the table size.
    async fn list_page_filtered(
        &self,
        filter: &PersonFilter,
        request: PageRequest,
        sort: SortSpec,
    ) -> Result<PageResult<Person>>;

    /// Number of records currently stored.
    async fn count(&self) -> Result<u64>;
}
