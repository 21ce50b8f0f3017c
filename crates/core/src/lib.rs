//! Shared types and the domain error taxonomy used by the db and api crates.

pub mod error;
pub mod types;
