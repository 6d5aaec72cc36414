//! Categories module - per-user income and expense categories.

mod categories_model;
mod categories_service;
mod categories_traits;


pub use categories_model::{category_in_use, Category, CategoryInput, NewCategory};
pub use categories_service::CategoryService;
pub use categories_traits::{CategoryRepositoryTrait, CategoryServiceTrait};
