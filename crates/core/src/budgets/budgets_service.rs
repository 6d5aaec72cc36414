use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use super::budgets_model::{Budget, BudgetInput, BudgetPeriod, BudgetWithUsage, NewBudget};
use super::budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
use crate::categories::CategoryRepositoryTrait;
use crate::errors::{Error, Result};
use crate::transactions::{TransactionRepositoryTrait, TransactionType};
use crate::utils::{non_blank, parse_date_input, positive_amount, DateWindow};

/// Service for budgets. Spending is derived from expense transactions on
/// every read.
pub struct BudgetService {
    repository: Arc<dyn BudgetRepositoryTrait>,
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    category_repository: Arc<dyn CategoryRepositoryTrait>,
}

impl BudgetService {
    pub fn new(
        repository: Arc<dyn BudgetRepositoryTrait>,
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
        category_repository: Arc<dyn CategoryRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            transaction_repository,
            category_repository,
        }
    }

    fn with_usage(&self, budget: Budget) -> Result<BudgetWithUsage> {
        let window = DateWindow::inclusive(budget.start_date, budget.end_date);
        let spent = self.transaction_repository.sum_amount(
            &budget.user_id,
            TransactionType::Expense,
            &window,
            budget.category_id.as_deref(),
        )?;
        Ok(BudgetWithUsage::new(budget, spent))
    }

    fn validate(&self, user_id: &str, input: BudgetInput) -> Result<NewBudget> {
        let (Some(name), Some(amount), Some(period), Some(start_date), Some(end_date)) = (
            non_blank(input.name.as_deref()),
            input.amount.filter(|a| !a.is_blank()),
            non_blank(input.period.as_deref()),
            non_blank(input.start_date.as_deref()),
            non_blank(input.end_date.as_deref()),
        ) else {
            return Err(Error::missing_field("All fields are required"));
        };

        let amount = positive_amount(&amount, "Amount")?;
        let period: BudgetPeriod = period.parse()?;
        let start_date = parse_date_input(&start_date)?;
        let end_date = parse_date_input(&end_date)?;
        if end_date < start_date {
            return Err(Error::invalid_input("End date cannot be before start date"));
        }

        let category_id = non_blank(input.category_id.as_deref());
        if let Some(category_id) = category_id.as_deref() {
            if self
                .category_repository
                .get_for_user(user_id, category_id)?
                .is_none()
            {
                return Err(Error::invalid_input("Invalid category"));
            }
        }

        Ok(NewBudget {
            user_id: user_id.to_string(),
            name,
            amount,
            period,
            start_date,
            end_date,
            category_id,
        })
    }
}

#[async_trait]
impl BudgetServiceTrait for BudgetService {
    fn list_budgets(&self, user_id: &str) -> Result<Vec<BudgetWithUsage>> {
        self.repository
            .list_for_user(user_id)?
            .into_iter()
            .map(|budget| self.with_usage(budget))
            .collect()
    }

    async fn create_budget(&self, user_id: &str, input: BudgetInput) -> Result<BudgetWithUsage> {
        let new_budget = self.validate(user_id, input)?;
        let budget = self.repository.insert(new_budget).await?;
        info!("Created {} budget {} for user {}", budget.period, budget.id, user_id);
        self.with_usage(budget)
    }

    async fn delete_budget(&self, user_id: &str, id: &str) -> Result<()> {
        if self.repository.delete_for_user(user_id, id).await? == 0 {
            return Err(Error::not_found("Budget not found"));
        }
        Ok(())
    }
}
