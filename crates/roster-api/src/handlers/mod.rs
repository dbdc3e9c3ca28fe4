//! HTTP request handlers

pub mod persons;
