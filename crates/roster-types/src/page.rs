//! Pagination and sorting types
//!
//! `PageRequest`/`SortSpec` describe how a caller wants a result set
//! sliced and ordered; `PageResult` is the returned window plus totals.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::person::Person;

/// A requested page window. `page` is 0-based.
///
/// Bounds are deliberately signed: negative values are passed through to
/// the storage layer, which rejects them with its native error, the same
/// way a relational pager would.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub size: i64,
}

impl PageRequest {
    pub fn new(page: i64, size: i64) -> Self {
        Self { page, size }
    }
}

/// Person fields a result set can be sorted by.
///
/// Parsed from the camelCase wire names used in query strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    NumberPassport,
    Name,
    Surname,
    Age,
    Sex,
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(SortField::Id),
            "numberPassport" => Ok(SortField::NumberPassport),
            "name" => Ok(SortField::Name),
            "surname" => Ok(SortField::Surname),
            "age" => Ok(SortField::Age),
            "sex" => Ok(SortField::Sex),
            _ => Err(format!("Unknown sort field: {}", s)),
        }
    }
}

/// Sort direction keyword, parsed case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(format!("Unknown sort direction: {}", s)),
        }
    }
}

/// A validated sort specification: field plus direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Total-order comparator over persons for this specification.
    ///
    /// Used with a stable sort so records that compare equal keep their
    /// store-native relative order.
    pub fn compare(&self, a: &Person, b: &Person) -> Ordering {
        let ordering = match self.field {
            SortField::Id => a.id.cmp(&b.id),
            SortField::NumberPassport => a.number_passport.cmp(&b.number_passport),
            SortField::Name => a.name.cmp(&b.name),
            SortField::Surname => a.surname.cmp(&b.surname),
            SortField::Age => a.age.cmp(&b.age),
            SortField::Sex => a.sex.cmp(&b.sex),
        };
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// One page of results plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    pub content: Vec<T>,
    /// 0-based index of this page
    pub page: i64,
    /// Requested page size (the last page may hold fewer records)
    pub size: i64,
    pub total_pages: u64,
    pub total_elements: u64,
}

impl<T> PageResult<T> {
    /// Build a page, deriving `total_pages = ceil(total_elements / size)`.
    ///
    /// A non-positive size yields zero pages; callers are expected to have
    /// rejected such sizes before any content was produced.
    pub fn new(content: Vec<T>, page: i64, size: i64, total_elements: u64) -> Self {
        let total_pages =
            if size > 0 { total_elements.div_ceil(size as u64) } else { 0 };
        Self { content, page, size, total_pages, total_elements }
    }

    /// Project page content into another shape, keeping the metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResult<U> {
        PageResult {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_pages: self.total_pages,
            total_elements: self.total_elements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_field_parses_wire_names() {
        assert_eq!("numberPassport".parse::<SortField>().unwrap(), SortField::NumberPassport);
        assert_eq!("surname".parse::<SortField>().unwrap(), SortField::Surname);
        assert!("passport".parse::<SortField>().is_err());
        // Wire names are exact; snake_case is not accepted
        assert!("number_passport".parse::<SortField>().is_err());
    }

    #[test]
    fn test_sort_direction_case_insensitive() {
        assert_eq!("asc".parse::<SortDirection>().unwrap(), SortDirection::Asc);
        assert_eq!("DESC".parse::<SortDirection>().unwrap(), SortDirection::Desc);
        assert_eq!("Desc".parse::<SortDirection>().unwrap(), SortDirection::Desc);
        assert!("ascending".parse::<SortDirection>().is_err());
    }

    #[test]
    fn test_comparator_orders_by_field_and_direction() {
        let younger = Person {
            id: 1,
            number_passport: 5,
            name: "A".to_string(),
            surname: "B".to_string(),
            age: 20,
            sex: "Male".to_string(),
        };
        let older = Person { id: 2, age: 40, ..younger.clone() };

        let asc = SortSpec::new(SortField::Age, SortDirection::Asc);
        assert_eq!(asc.compare(&younger, &older), Ordering::Less);

        let desc = SortSpec::new(SortField::Age, SortDirection::Desc);
        assert_eq!(desc.compare(&younger, &older), Ordering::Greater);
    }

    #[test]
    fn test_page_result_totals() {
        let page = PageResult::new(vec![1, 2, 3], 2, 10, 23);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_elements, 23);

        let exact = PageResult::<i32>::new(vec![], 0, 10, 30);
        assert_eq!(exact.total_pages, 3);

        let empty = PageResult::<i32>::new(vec![], 0, 10, 0);
        assert_eq!(empty.total_pages, 0);
    }

    #[test]
    fn test_page_result_zero_size_guard() {
        let page = PageResult::<i32>::new(vec![], 0, 0, 23);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_page_result_map_keeps_metadata() {
        let page = PageResult::new(vec![1, 2], 1, 2, 5).map(|n| n * 10);
        assert_eq!(page.content, vec![10, 20]);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_elements, 5);
    }

    #[test]
    fn test_page_result_serializes_camel_case() {
        let page = PageResult::new(vec![1], 0, 10, 1);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["totalPages"], 1);
        assert_eq!(json["totalElements"], 1);
        assert!(json.get("content").is_some());
    }
}
