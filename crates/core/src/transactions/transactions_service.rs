use async_trait::async_trait;
use log::{debug, info};
use std::sync::Arc;

use super::transactions_model::{NewTransaction, TransactionInput, TransactionType, TransactionWithCategory};
use super::transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
use crate::categories::CategoryRepositoryTrait;
use crate::errors::{Error, Result};
use crate::utils::{non_blank, parse_datetime_input, positive_amount};

/// Service for recording and listing transactions
pub struct TransactionService {
    repository: Arc<dyn TransactionRepositoryTrait>,
    category_repository: Arc<dyn CategoryRepositoryTrait>,
}

impl TransactionService {
    pub fn new(
        repository: Arc<dyn TransactionRepositoryTrait>,
        category_repository: Arc<dyn CategoryRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            category_repository,
        }
    }

    fn validate(&self, user_id: &str, input: TransactionInput) -> Result<NewTransaction> {
        let amount = input.amount.filter(|a| !a.is_blank());
        let transaction_type = non_blank(input.transaction_type.as_deref());
        let description = non_blank(input.description.as_deref());
        let date = non_blank(input.date.as_deref());
        let category_id = non_blank(input.category_id.as_deref());

        let (Some(amount), Some(transaction_type), Some(description), Some(date), Some(category_id)) =
            (amount, transaction_type, description, date, category_id)
        else {
            return Err(Error::missing_field("All fields are required"));
        };

        let amount = positive_amount(&amount, "Amount")?;
        let transaction_type: TransactionType = transaction_type.parse()?;
        let date = parse_datetime_input(&date)?;

        if self
            .category_repository
            .get_for_user(user_id, &category_id)?
            .is_none()
        {
            debug!("Category {} not found for user {}", category_id, user_id);
            return Err(Error::invalid_input("Invalid category"));
        }

        Ok(NewTransaction {
            user_id: user_id.to_string(),
            category_id,
            amount,
            transaction_type,
            description,
            date,
        })
    }
}

#[async_trait]
impl TransactionServiceTrait for TransactionService {
    fn list_transactions(&self, user_id: &str) -> Result<Vec<TransactionWithCategory>> {
        self.repository.list_for_user(user_id)
    }

    async fn create_transaction(
        &self,
        user_id: &str,
        input: TransactionInput,
    ) -> Result<TransactionWithCategory> {
        let new_transaction = self.validate(user_id, input)?;
        let created = self.repository.insert(new_transaction).await?;
        info!(
            "Created {} transaction {} for user {}",
            created.transaction_type, created.id, user_id
        );
        self.repository
            .get_for_user(user_id, &created.id)?
            .ok_or_else(|| Error::Unexpected(format!("Transaction {} vanished after insert", created.id)))
    }

    async fn delete_transaction(&self, user_id: &str, id: &str) -> Result<()> {
        let deleted = self.repository.delete_for_user(user_id, id).await?;
        if deleted == 0 {
            return Err(Error::not_found("Transaction not found"));
        }
        Ok(())
    }
}
