use crate::errors::Result;
use crate::goals::goals_model::{Goal, GoalInput, GoalUpdate, NewGoal};
use async_trait::async_trait;

/// Trait for goal repository operations
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    /// Goals of the user ordered by deadline.
    fn list_for_user(&self, user_id: &str) -> Result<Vec<Goal>>;
    fn get_for_user(&self, user_id: &str, id: &str) -> Result<Option<Goal>>;
    async fn insert(&self, new_goal: NewGoal) -> Result<Goal>;
    /// Writes `goal` only if the stored version still equals
    /// `expected_version`, bumping the version. Fails with `Error::Conflict`
    /// otherwise.
    async fn update(&self, goal: Goal, expected_version: i32) -> Result<Goal>;
    async fn delete_for_user(&self, user_id: &str, id: &str) -> Result<usize>;
}

/// Trait for goal service operations
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    fn get_goals(&self, user_id: &str) -> Result<Vec<Goal>>;
    async fn create_goal(&self, user_id: &str, input: GoalInput) -> Result<Goal>;
    async fn update_goal(&self, user_id: &str, id: &str, update: GoalUpdate) -> Result<Goal>;
    async fn delete_goal(&self, user_id: &str, id: &str) -> Result<()>;
}
