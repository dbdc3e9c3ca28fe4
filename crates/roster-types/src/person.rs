//! Person entity and its transport projection
//!
//! The entity carries the store-assigned identifier; the view is the shape
//! exchanged over the wire and never carries one. Conversions between the
//! two are explicit field-by-field copies.

use serde::{Deserialize, Serialize};

/// A person record as persisted by the storage layer.
///
/// The `id` is assigned by the store on insert and is immutable afterwards.
/// `number_passport` is an identifier-like field but is NOT unique: the
/// system permits duplicates by design.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Store-assigned surrogate identifier
    pub id: i64,

    /// Passport number (duplicates permitted)
    pub number_passport: i32,

    pub name: String,

    pub surname: String,

    /// Age in years, non-negative
    pub age: u32,

    /// Sex category, free-form string
    pub sex: String,
}

/// Transport projection of [`Person`] without the store-assigned identifier.
///
/// Used both as creation input and as list/page output. Constructed fresh
/// per request; holds no state of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonView {
    pub number_passport: i32,
    pub name: String,
    pub surname: String,
    pub age: u32,
    pub sex: String,
}

impl PersonView {
    /// Attach a store-assigned identifier, producing the entity to persist.
    ///
    /// Any identifier present in caller input never reaches this path; the
    /// id always comes from the store.
    pub fn into_person(self, id: i64) -> Person {
        Person {
            id,
            number_passport: self.number_passport,
            name: self.name,
            surname: self.surname,
            age: self.age,
            sex: self.sex,
        }
    }
}

impl From<&Person> for PersonView {
    fn from(person: &Person) -> Self {
        Self {
            number_passport: person.number_passport,
            name: person.name.clone(),
            surname: person.surname.clone(),
            age: person.age,
            sex: person.sex.clone(),
        }
    }
}

impl From<Person> for PersonView {
    fn from(person: Person) -> Self {
        Self {
            number_passport: person.number_passport,
            name: person.name,
            surname: person.surname,
            age: person.age,
            sex: person.sex,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_view() -> PersonView {
        PersonView {
            number_passport: 42417,
            name: "Alice".to_string(),
            surname: "Johnson".to_string(),
            age: 34,
            sex: "Female".to_string(),
        }
    }

    #[test]
    fn test_view_into_person_attaches_id() {
        let person = sample_view().into_person(7);
        assert_eq!(person.id, 7);
        assert_eq!(person.number_passport, 42417);
        assert_eq!(person.name, "Alice");
        assert_eq!(person.surname, "Johnson");
        assert_eq!(person.age, 34);
        assert_eq!(person.sex, "Female");
    }

    #[test]
    fn test_person_into_view_drops_id() {
        let view = sample_view();
        let round_tripped = PersonView::from(view.clone().into_person(99));
        assert_eq!(round_tripped, view);
    }

    #[test]
    fn test_person_serializes_camel_case() {
        let person = sample_view().into_person(1);
        let json = serde_json::to_value(&person).unwrap();
        assert_eq!(json["numberPassport"], 42417);
        assert_eq!(json["id"], 1);
    }

    #[test]
    fn test_view_serialization_round_trip() {
        let view = sample_view();
        let json = serde_json::to_string(&view).unwrap();
        let deserialized: PersonView = serde_json::from_str(&json).unwrap();
        assert_eq!(view, deserialized);
        // The view shape never exposes an identifier
        assert!(!json.contains("\"id\""));
    }
}
