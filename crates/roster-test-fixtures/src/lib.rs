//! Shared test fixtures for the roster workspace
//!
//! Small builders so tests construct persons and views without repeating
//! every field at each call site.

use roster_types::{Person, PersonView};

/// Build a transport view with the given fields.
pub fn view(number_passport: i32, name: &str, surname: &str, age: u32, sex: &str) -> PersonView {
    PersonView {
        number_passport,
        name: name.to_string(),
        surname: surname.to_string(),
        age,
        sex: sex.to_string(),
    }
}

/// Build an entity with an explicit identifier.
pub fn person(
    id: i64,
    number_passport: i32,
    name: &str,
    surname: &str,
    age: u32,
    sex: &str,
) -> Person {
    view(number_passport, name, surname, age, sex).into_person(id)
}

/// A handful of distinct views, passports and ages increasing with `n`.
pub fn sample_views(count: usize) -> Vec<PersonView> {
    (0..count)
        .map(|n| {
            view(
                1000 + n as i32,
                &format!("Name{}", n),
                &format!("Surname{}", n),
                (n % 100) as u32,
                if n % 2 == 0 { "Male" } else { "Female" },
            )
        })
        .collect()
}
