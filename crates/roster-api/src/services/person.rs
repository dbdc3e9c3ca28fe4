//! Person service - record creation, listing, pagination, and filtering

use std::sync::{Arc, Mutex};

use rand::{rngs::StdRng, Rng, SeedableRng};
use roster_store::PersonStore;
use roster_types::{
    PageRequest, PageResult, Person, PersonFilter, PersonView, SortSpec,
};

use crate::ApiError;

/// Alphabet for generated names: the 52 upper/lower-case Latin letters.
const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Sex value assigned to generated sample records.
const SAMPLE_SEX: &str = "Male";

const NAME_LENGTH: usize = 5;
const SURNAME_LENGTH: usize = 8;

/// Service for managing person records
///
/// Holds the storage gateway and the random source used for sample-record
/// generation. The random source is injected rather than drawn from a
/// process-wide generator: seeding it makes batch creation deterministic,
/// and the mutex keeps concurrent batch requests from interleaving draws
/// unsafely.
pub struct PersonService {
    store: Arc<dyn PersonStore>,
    rng: Mutex<StdRng>,
}

impl PersonService {
    /// Creates a service with an entropy-seeded generator.
    pub fn new(store: Arc<dyn PersonStore>) -> Self {
        Self { store, rng: Mutex::new(StdRng::from_entropy()) }
    }

    /// Creates a service with a fixed generator seed.
    pub fn with_seed(store: Arc<dyn PersonStore>, seed: u64) -> Self {
        Self { store, rng: Mutex::new(StdRng::seed_from_u64(seed)) }
    }

    /// Persists a new record derived from the input view.
    ///
    /// The identifier is assigned by the store; nothing from the caller
    /// can influence it. Duplicate passport numbers are permitted.
    #[tracing::instrument(skip(self, view))]
    pub async fn create(&self, view: PersonView) -> Result<PersonView, ApiError> {
        let person = self
            .store
            .insert(view)
            .await
            .map_err(|e| ApiError::Internal(format!("Failed to create person: {}", e)))?;

        tracing::debug!(id = person.id, "Person created");

        Ok(PersonView::from(person))
    }

    /// Generates and persists `count` random records.
    ///
    /// Each record is an independent insert; a failure partway leaves the
    /// earlier inserts in place and aborts the request. A count of zero is
    /// a no-op that still returns a confirmation.
    #[tracing::instrument(skip(self))]
    pub async fn create_random_batch(&self, count: u32) -> Result<String, ApiError> {
        for _ in 0..count {
            let view = self.random_view();
            self.create(view).await?;
        }

        tracing::info!(count, "Random person batch created");

        Ok(format!("Created {} person records", count))
    }

    /// Returns every record, unfiltered, in store-native order.
    #[tracing::instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<PersonView>, ApiError> {
        let persons = self
            .store
            .list()
            .await
            .map_err(|e| ApiError::Internal(format!("Failed to list persons: {}", e)))?;

        tracing::debug!(count = persons.len(), "Listed persons");

        Ok(persons.into_iter().map(PersonView::from).collect())
    }

    /// Returns one sorted page of entities, identifiers included.
    ///
    /// `page` is 0-based. An unknown sort field or direction is a client
    /// error raised before the store is consulted; negative page bounds
    /// pass through to the store and surface as its native error.
    #[tracing::instrument(skip(self))]
    pub async fn list_page(
        &self,
        page: i64,
        size: i64,
        sort_field: &str,
        sort_direction: &str,
    ) -> Result<PageResult<Person>, ApiError> {
        let sort = parse_sort(sort_field, sort_direction)?;

        let result = self
            .store
            .list_page(PageRequest::new(page, size), sort)
            .await
            .map_err(|e| ApiError::Internal(format!("Failed to page persons: {}", e)))?;

        tracing::debug!(
            page,
            size,
            total_elements = result.total_elements,
            "Listed person page"
        );

        Ok(result)
    }

    /// Returns one sorted page projected to views.
    pub async fn list_page_views(
        &self,
        page: i64,
        size: i64,
        sort_field: &str,
        sort_direction: &str,
    ) -> Result<PageResult<PersonView>, ApiError> {
        let result = self.list_page(page, size, sort_field, sort_direction).await?;
        Ok(result.map(PersonView::from))
    }

    /// Returns one sorted page of views restricted to matching records.
    ///
    /// Totals reflect the filtered count. An empty filter behaves exactly
    /// like the unfiltered page listing.
    #[tracing::instrument(skip(self, filter))]
    pub async fn list_page_filtered(
        &self,
        filter: &PersonFilter,
        page: i64,
        size: i64,
        sort_field: &str,
        sort_direction: &str,
    ) -> Result<PageResult<PersonView>, ApiError> {
        let sort = parse_sort(sort_field, sort_direction)?;

        let result = self
            .store
            .list_page_filtered(filter, PageRequest::new(page, size), sort)
            .await
            .map_err(|e| ApiError::Internal(format!("Failed to filter persons: {}", e)))?;

        tracing::debug!(
            page,
            size,
            total_elements = result.total_elements,
            "Listed filtered person page"
        );

        Ok(result.map(PersonView::from))
    }

    /// Draw one random sample record from the injected generator.
    ///
    /// The guard is dropped before any await point so the service future
    /// stays Send.
    fn random_view(&self) -> PersonView {
        let mut rng = self.rng.lock().expect("person rng poisoned");

        PersonView {
            number_passport: rng.gen_range(0..100_000),
            name: random_letters(&mut rng, NAME_LENGTH),
            surname: random_letters(&mut rng, SURNAME_LENGTH),
            age: rng.gen_range(0..100),
            sex: SAMPLE_SEX.to_string(),
        }
    }
}

fn random_letters(rng: &mut StdRng, length: usize) -> String {
    (0..length).map(|_| LETTERS[rng.gen_range(0..LETTERS.len())] as char).collect()
}

/// Parse sort parameters, surfacing unknown values as client errors.
fn parse_sort(sort_field: &str, sort_direction: &str) -> Result<SortSpec, ApiError> {
    let field = sort_field.parse().map_err(ApiError::InvalidRequest)?;
    let direction = sort_direction.parse().map_err(ApiError::InvalidRequest)?;
    Ok(SortSpec::new(field, direction))
}
