use async_trait::async_trait;

use crate::categories::categories_model::{Category, CategoryInput, NewCategory};
use crate::errors::Result;

/// Trait for category repository operations
#[async_trait]
pub trait CategoryRepositoryTrait: Send + Sync {
    /// Categories of the user ordered by name.
    fn list_for_user(&self, user_id: &str) -> Result<Vec<Category>>;
    fn get_for_user(&self, user_id: &str, id: &str) -> Result<Option<Category>>;
    /// Fails with a unique violation when the user already has a category
    /// with the same name.
    async fn insert(&self, new_category: NewCategory) -> Result<Category>;
    async fn delete_for_user(&self, user_id: &str, id: &str) -> Result<usize>;
}

/// Trait for category service operations
#[async_trait]
pub trait CategoryServiceTrait: Send + Sync {
    fn list_categories(&self, user_id: &str) -> Result<Vec<Category>>;
    async fn create_category(&self, user_id: &str, input: CategoryInput) -> Result<Category>;
    async fn delete_category(&self, user_id: &str, id: &str) -> Result<()>;
}
