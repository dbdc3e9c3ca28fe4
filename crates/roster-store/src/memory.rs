//! In-memory storage backend for testing and development

use std::sync::Arc;

use async_trait::async_trait;
use roster_types::{
    PageRequest, PageResult, Person, PersonFilter, PersonView, SortSpec, StoreError,
};
use tokio::sync::RwLock;

use crate::{PersonStore, Result};

/// In-memory person store with sequential id assignment.
///
/// Records live in insertion order, which is the backend's native order
/// for unpaged listing. Paged reads sort a snapshot with a stable sort so
/// equal keys keep that native order.
pub struct MemoryBackend {
    data: Arc<RwLock<MemoryStore>>,
}

struct MemoryStore {
    persons: Vec<Person>,
    next_id: i64,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self { data: Arc::new(RwLock::new(MemoryStore { persons: Vec::new(), next_id: 1 })) }
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Reject page windows a relational pager would refuse.
fn validate_page_request(request: &PageRequest) -> Result<()> {
    if request.page < 0 {
        return Err(StoreError::Database(format!(
            "Page index must not be negative: {}",
            request.page
        )));
    }
    if request.size < 1 {
        return Err(StoreError::Database(format!(
            "Page size must be at least one: {}",
            request.size
        )));
    }
    Ok(())
}

/// Sort a snapshot and cut the requested window out of it.
fn paginate(mut records: Vec<Person>, request: PageRequest, sort: SortSpec) -> PageResult<Person> {
    let total_elements = records.len() as u64;
    records.sort_by(|a, b| sort.compare(a, b));

    let offset = (request.page as usize).saturating_mul(request.size as usize);
    let content: Vec<Person> =
        records.into_iter().skip(offset).take(request.size as usize).collect();

    PageResult::new(content, request.page, request.size, total_elements)
}

#[async_trait]
impl PersonStore for MemoryBackend {
    async fn insert(&self, record: PersonView) -> Result<Person> {
        let mut store = self.data.write().await;

        let id = store.next_id;
        store.next_id += 1;

        let person = record.into_person(id);
        store.persons.push(person.clone());

        tracing::debug!(id, "Person inserted");

        Ok(person)
    }

    async fn list(&self) -> Result<Vec<Person>> {
        let store = self.data.read().await;
        Ok(store.persons.clone())
    }

    async fn list_page(&self, request: PageRequest, sort: SortSpec) -> Result<PageResult<Person>> {
        validate_page_request(&request)?;

        let store = self.data.read().await;
        Ok(paginate(store.persons.clone(), request, sort))
    }

    async fn list_page_filtered(
        &self,
        filter: &PersonFilter,
        request: PageRequest,
        sort: SortSpec,
    ) -> Result<PageResult<Person>> {
        validate_page_request(&request)?;

        let store = self.data.read().await;
        let matching: Vec<Person> =
            store.persons.iter().filter(|p| filter.matches(p)).cloned().collect();

        Ok(paginate(matching, request, sort))
    }

    async fn count(&self) -> Result<u64> {
        let store = self.data.read().await;
        Ok(store.persons.len() as u64)
    }
}
