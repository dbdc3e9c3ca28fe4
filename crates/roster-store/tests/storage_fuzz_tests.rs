//! Storage Layer Property Tests
//!
//! Property-based tests over the memory backend, checking filter
//! conjunction soundness, pagination invariants, and sort behavior for
//! arbitrary data sets.

use std::sync::Arc;

use proptest::prelude::*;
use roster_store::{MemoryBackend, PersonStore};
use roster_types::{
    PageRequest, PersonFilter, PersonView, SortDirection, SortField, SortSpec,
};

/// Generate arbitrary person views, including awkward strings
fn arb_view() -> impl Strategy<Value = PersonView> {
    (
        0..100_000i32,
        prop_oneof![
            "[A-Za-z]{1,12}",
            Just(String::new()),
            "\\PC{1,20}",
        ],
        prop_oneof![
            "[A-Za-z]{1,16}",
            Just(String::new()),
        ],
        0..150u32,
        prop_oneof![Just("Male".to_string()), Just("Female".to_string()), "\\PC{1,10}"],
    )
        .prop_map(|(number_passport, name, surname, age, sex)| PersonView {
            number_passport,
            name,
            surname,
            age,
            sex,
        })
}

fn arb_filter() -> impl Strategy<Value = PersonFilter> {
    (
        prop::option::of(0..100_000i32),
        prop::option::of("[A-Za-z]{1,12}"),
        prop::option::of(0..150u32),
        prop::option::of(0..150u32),
        prop::option::of(0..150u32),
    )
        .prop_map(|(number_passport, name, age, start_age, finish_age)| PersonFilter {
            number_passport,
            name,
            surname: None,
            age,
            sex: None,
            start_age,
            finish_age,
        })
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Runtime::new().unwrap().block_on(future)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every record in a filtered page satisfies every supplied criterion
    #[test]
    fn fuzz_filtered_pages_have_no_false_positives(
        views in prop::collection::vec(arb_view(), 0..60),
        filter in arb_filter(),
    ) {
        block_on(async {
            let store = Arc::new(MemoryBackend::new());
            for view in views {
                store.insert(view).await.unwrap();
            }

            let sort = SortSpec::new(SortField::Id, SortDirection::Asc);
            let page = store
                .list_page_filtered(&filter, PageRequest::new(0, 1000), sort)
                .await
                .unwrap();

            for person in &page.content {
                assert!(filter.matches(person), "false positive in filtered page");
            }

            // Totals agree with a full scan through the same predicate
            let scan_count =
                store.list().await.unwrap().iter().filter(|p| filter.matches(p)).count();
            assert_eq!(page.total_elements, scan_count as u64);
        });
    }

    /// Page windows never exceed the requested size and totals obey the
    /// ceiling rule, including the final partial page
    #[test]
    fn fuzz_pagination_invariants_hold(
        views in prop::collection::vec(arb_view(), 0..60),
        size in 1..20i64,
    ) {
        block_on(async {
            let store = Arc::new(MemoryBackend::new());
            let total = views.len() as u64;
            for view in views {
                store.insert(view).await.unwrap();
            }

            let sort = SortSpec::new(SortField::NumberPassport, SortDirection::Asc);
            let expected_pages = total.div_ceil(size as u64);

            let mut seen = 0u64;
            for page_index in 0..expected_pages.max(1) {
                let page = store
                    .list_page(PageRequest::new(page_index as i64, size), sort)
                    .await
                    .unwrap();

                assert!(page.content.len() as i64 <= size);
                assert_eq!(page.total_pages, expected_pages);
                assert_eq!(page.total_elements, total);
                seen += page.content.len() as u64;
            }
            assert_eq!(seen, total, "pages must cover every record exactly once");
        });
    }

    /// Sorted pages are totally ordered under the requested comparator
    #[test]
    fn fuzz_sorted_pages_are_ordered(
        views in prop::collection::vec(arb_view(), 0..60),
        descending in any::<bool>(),
    ) {
        block_on(async {
            let store = Arc::new(MemoryBackend::new());
            for view in views {
                store.insert(view).await.unwrap();
            }

            let direction = if descending { SortDirection::Desc } else { SortDirection::Asc };
            let sort = SortSpec::new(SortField::Age, direction);
            let page = store.list_page(PageRequest::new(0, 1000), sort).await.unwrap();

            for pair in page.content.windows(2) {
                assert!(
                    sort.compare(&pair[0], &pair[1]) != std::cmp::Ordering::Greater,
                    "page content out of order"
                );
            }
        });
    }

    /// An empty filter pages identically to the unfiltered path
    #[test]
    fn fuzz_empty_filter_is_no_filter(
        views in prop::collection::vec(arb_view(), 0..40),
        size in 1..10i64,
    ) {
        block_on(async {
            let store = Arc::new(MemoryBackend::new());
            for view in views {
                store.insert(view).await.unwrap();
            }

            let sort = SortSpec::new(SortField::Surname, SortDirection::Asc);
            let request = PageRequest::new(0, size);

            let unfiltered = store.list_page(request, sort).await.unwrap();
            let filtered = store
                .list_page_filtered(&PersonFilter::default(), request, sort)
                .await
                .unwrap();

            assert_eq!(unfiltered, filtered);
        });
    }
}
