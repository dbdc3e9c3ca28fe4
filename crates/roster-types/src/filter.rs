//! Filter criteria for person queries
//!
//! A [`PersonFilter`] is a set of optional constraints combined with
//! logical AND. It compiles down to a plain predicate over [`Person`]
//! rather than a backend-specific query builder, so any storage backend
//! can honor it.

use serde::{Deserialize, Serialize};

use crate::person::Person;

/// Optional match criteria for person records.
///
/// Every field is optional and an absent field imposes no constraint.
/// Exact-match fields compare with whole-value, case-sensitive equality.
/// `start_age`/`finish_age` form an inclusive range; either bound may be
/// supplied on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonFilter {
    pub number_passport: Option<i32>,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub age: Option<u32>,
    pub sex: Option<String>,
    pub start_age: Option<u32>,
    pub finish_age: Option<u32>,
}

impl PersonFilter {
    /// True when no criterion is supplied; such a filter matches all records.
    pub fn is_empty(&self) -> bool {
        self.number_passport.is_none()
            && self.name.is_none()
            && self.surname.is_none()
            && self.age.is_none()
            && self.sex.is_none()
            && self.start_age.is_none()
            && self.finish_age.is_none()
    }

    /// Evaluate the conjunction of all supplied criteria against a record.
    pub fn matches(&self, person: &Person) -> bool {
        if let Some(number_passport) = self.number_passport {
            if person.number_passport != number_passport {
                return false;
            }
        }
        if let Some(name) = &self.name {
            if person.name != *name {
                return false;
            }
        }
        if let Some(surname) = &self.surname {
            if person.surname != *surname {
                return false;
            }
        }
        if let Some(age) = self.age {
            if person.age != age {
                return false;
            }
        }
        if let Some(sex) = &self.sex {
            if person.sex != *sex {
                return false;
            }
        }
        if let Some(start_age) = self.start_age {
            if person.age < start_age {
                return false;
            }
        }
        if let Some(finish_age) = self.finish_age {
            if person.age > finish_age {
                return false;
            }
        }
        true
    }
}
