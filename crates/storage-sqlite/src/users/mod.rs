//! SQLite storage implementation for users.

mod model;
mod repository;

pub use model::{UserDB, UserProfileChangeset};
pub use repository::UserRepository;
