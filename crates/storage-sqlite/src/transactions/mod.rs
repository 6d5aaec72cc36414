//! SQLite storage implementation for transactions and their aggregates.

mod model;
mod repository;

pub use model::TransactionDB;
pub use repository::TransactionRepository;
