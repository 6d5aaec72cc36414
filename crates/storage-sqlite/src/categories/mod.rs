//! SQLite storage implementation for categories.

mod model;
mod repository;

pub(crate) use model::parse_type;
pub use model::CategoryDB;
pub use repository::CategoryRepository;
