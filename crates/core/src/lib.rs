//! Fintrack Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic for Fintrack.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod budgets;
pub mod categories;
pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod goals;
pub mod transactions;
pub mod users;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
