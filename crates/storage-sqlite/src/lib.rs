//! SQLite storage implementation for Fintrack.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `fintrack-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for all domain entities
//! - Database-specific model types (with Diesel derives)
//!
//! Reads go through the r2d2 pool; every write is funnelled through the
//! single writer actor (see [`db::WriteHandle`]).

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod budgets;
pub mod categories;
pub mod goals;
pub mod transactions;
pub mod users;

#[cfg(test)]
pub(crate) mod testing;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, open, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

pub use budgets::BudgetRepository;
pub use categories::CategoryRepository;
pub use goals::GoalRepository;
pub use transactions::TransactionRepository;
pub use users::UserRepository;

// Re-export from fintrack-core for convenience
pub use fintrack_core::errors::{DatabaseError, Error, Result};
