use async_trait::async_trait;

use crate::budgets::budgets_model::{Budget, BudgetInput, BudgetWithUsage, NewBudget};
use crate::errors::Result;

/// Trait for budget repository operations
#[async_trait]
pub trait BudgetRepositoryTrait: Send + Sync {
    /// Budgets of the user, newest first.
    fn list_for_user(&self, user_id: &str) -> Result<Vec<Budget>>;
    async fn insert(&self, new_budget: NewBudget) -> Result<Budget>;
    async fn delete_for_user(&self, user_id: &str, id: &str) -> Result<usize>;
}

/// Trait for budget service operations
#[async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    fn list_budgets(&self, user_id: &str) -> Result<Vec<BudgetWithUsage>>;
    async fn create_budget(&self, user_id: &str, input: BudgetInput) -> Result<BudgetWithUsage>;
    async fn delete_budget(&self, user_id: &str, id: &str) -> Result<()>;
}
