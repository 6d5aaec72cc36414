use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::errors::Result;
use crate::transactions::transactions_model::{
    CategoryTotal, NewTransaction, Transaction, TransactionInput, TransactionType,
    TransactionWithCategory,
};
use crate::utils::DateWindow;

/// Trait for transaction repository operations.
///
/// Every query is scoped to the owning user.
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    /// All transactions of the user, newest date first.
    fn list_for_user(&self, user_id: &str) -> Result<Vec<TransactionWithCategory>>;
    fn get_for_user(&self, user_id: &str, id: &str) -> Result<Option<TransactionWithCategory>>;
    async fn insert(&self, new_transaction: NewTransaction) -> Result<Transaction>;
    async fn delete_for_user(&self, user_id: &str, id: &str) -> Result<usize>;

    fn count_for_user(&self, user_id: &str) -> Result<i64>;
    fn count_for_category(&self, user_id: &str, category_id: &str) -> Result<i64>;

    /// Sum of amounts of the given type dated inside `window`, optionally
    /// restricted to one category.
    fn sum_amount(
        &self,
        user_id: &str,
        transaction_type: TransactionType,
        window: &DateWindow,
        category_id: Option<&str>,
    ) -> Result<f64>;

    /// Expense totals grouped by category name and color, unordered.
    fn expense_totals_by_category(
        &self,
        user_id: &str,
        window: &DateWindow,
    ) -> Result<Vec<CategoryTotal>>;

    /// `(date, amount)` pairs of the given type inside `window`.
    fn amounts_in_window(
        &self,
        user_id: &str,
        transaction_type: TransactionType,
        window: &DateWindow,
    ) -> Result<Vec<(NaiveDateTime, f64)>>;
}

/// Trait for transaction service operations
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    fn list_transactions(&self, user_id: &str) -> Result<Vec<TransactionWithCategory>>;
    async fn create_transaction(
        &self,
        user_id: &str,
        input: TransactionInput,
    ) -> Result<TransactionWithCategory>;
    async fn delete_transaction(&self, user_id: &str, id: &str) -> Result<()>;
}
