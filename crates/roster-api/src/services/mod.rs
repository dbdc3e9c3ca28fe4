//! Service layer
//!
//! Protocol-agnostic business logic shared by the REST handlers.

pub mod person;

pub use person::PersonService;
