use crate::errors::Result;
use crate::users::users_model::{NewUser, ProfileUpdate, User};
use async_trait::async_trait;

/// Trait for user repository operations
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    fn get_by_id(&self, user_id: &str) -> Result<Option<User>>;
    fn get_by_email(&self, email: &str) -> Result<Option<User>>;
    async fn insert(&self, new_user: NewUser) -> Result<User>;
    async fn update_profile(&self, user_id: &str, update: ProfileUpdate) -> Result<User>;
    async fn update_password_hash(&self, user_id: &str, password_hash: String) -> Result<()>;
    /// Deletes the user; owned rows are removed by cascade.
    async fn delete(&self, user_id: &str) -> Result<usize>;
}

/// Trait for user service operations
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    fn get_user(&self, user_id: &str) -> Result<Option<User>>;
    fn find_by_email(&self, email: &str) -> Result<Option<User>>;
    async fn register(&self, new_user: NewUser) -> Result<User>;
    async fn update_profile(&self, user_id: &str, update: ProfileUpdate) -> Result<User>;
    async fn change_password(&self, user_id: &str, password_hash: String) -> Result<()>;
    async fn delete_user(&self, user_id: &str) -> Result<()>;
}
