//! Person record handlers
//!
//! Provides the REST endpoints under the `/person` path prefix: random
//! batch creation, unpaged listing, paged/sorted listing (entity and view
//! shapes), and filtered search.

pub mod create_batch;
pub mod list;
pub mod pages;
pub mod search;
pub mod views;

use serde::Deserialize;

/// Query parameters shared by the paged listing endpoints
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQueryParams {
    /// 0-based page index
    #[serde(default)]
    pub page: i64,

    /// Page size
    #[serde(default = "default_size")]
    pub size: i64,

    /// Person field to sort by (camelCase wire name)
    #[serde(default = "default_sort_field")]
    pub sort_field: String,

    /// `asc` or `desc`, case-insensitive
    #[serde(default = "default_sort_direction")]
    pub sort_direction: String,
}

pub(crate) fn default_size() -> i64 {
    10
}

pub(crate) fn default_sort_field() -> String {
    "numberPassport".to_string()
}

pub(crate) fn default_sort_direction() -> String {
    "asc".to_string()
}

impl Default for PageQueryParams {
    fn default() -> Self {
        Self {
            page: 0,
            size: default_size(),
            sort_field: default_sort_field(),
            sort_direction: default_sort_direction(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_params_defaults() {
        let params: PageQueryParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.page, 0);
        assert_eq!(params.size, 10);
        assert_eq!(params.sort_field, "numberPassport");
        assert_eq!(params.sort_direction, "asc");
    }

    #[test]
    fn test_page_params_camel_case_keys() {
        let params: PageQueryParams =
            serde_json::from_str(r#"{"page": 2, "sortField": "age", "sortDirection": "desc"}"#)
                .unwrap();
        assert_eq!(params.page, 2);
        assert_eq!(params.sort_field, "age");
        assert_eq!(params.sort_direction, "desc");
    }
}
