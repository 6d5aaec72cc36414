use chrono::NaiveDate;
use log::debug;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use super::dashboard_model::{
    CategorySpending, DailySpendingPoint, DashboardCharts, DashboardStats, MonthlySummaryPoint,
};
use crate::constants::{DAILY_SPENDING_DAYS, MONTHLY_SUMMARY_MONTHS};
use crate::errors::Result;
use crate::transactions::{TransactionRepositoryTrait, TransactionType};
use crate::utils::{
    day_label, month_label, round_amount, today_local, trailing_days, trailing_months, DateWindow,
};

pub trait DashboardServiceTrait: Send + Sync {
    /// Statistics as of the server's local date.
    fn get_dashboard(&self, user_id: &str) -> Result<DashboardStats>;
    fn get_dashboard_as_of(&self, user_id: &str, today: NaiveDate) -> Result<DashboardStats>;
}

/// Read-only aggregation over the transactions of one user.
pub struct DashboardService {
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
}

impl DashboardService {
    pub fn new(transaction_repository: Arc<dyn TransactionRepositoryTrait>) -> Self {
        Self {
            transaction_repository,
        }
    }

    fn monthly_summary(&self, user_id: &str, today: NaiveDate) -> Result<Vec<MonthlySummaryPoint>> {
        trailing_months(today, MONTHLY_SUMMARY_MONTHS)
            .into_iter()
            .map(|window| {
                let income = self.transaction_repository.sum_amount(
                    user_id,
                    TransactionType::Income,
                    &window,
                    None,
                )?;
                let expense = self.transaction_repository.sum_amount(
                    user_id,
                    TransactionType::Expense,
                    &window,
                    None,
                )?;
                Ok(MonthlySummaryPoint {
                    month: month_label(window.start),
                    income: round_amount(income),
                    expense: round_amount(expense),
                })
            })
            .collect()
    }

    fn category_spending(&self, user_id: &str, month: &DateWindow) -> Result<Vec<CategorySpending>> {
        let mut spending: Vec<CategorySpending> = self
            .transaction_repository
            .expense_totals_by_category(user_id, month)?
            .into_iter()
            .map(|total| CategorySpending {
                name: total.name,
                value: round_amount(total.total),
                color: total.color,
            })
            .collect();
        spending.sort_by(|a, b| {
            b.value
                .partial_cmp(&a.value)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(spending)
    }

    fn daily_spending(&self, user_id: &str, today: NaiveDate) -> Result<Vec<DailySpendingPoint>> {
        let days = trailing_days(today, DAILY_SPENDING_DAYS);
        let (Some(first), Some(last)) = (days.first(), days.last()) else {
            return Ok(Vec::new());
        };
        let window = DateWindow::inclusive(*first, *last);

        let mut per_day: HashMap<NaiveDate, f64> = HashMap::new();
        for (date, amount) in self.transaction_repository.amounts_in_window(
            user_id,
            TransactionType::Expense,
            &window,
        )? {
            *per_day.entry(date.date()).or_insert(0.0) += amount;
        }

        Ok(days
            .into_iter()
            .map(|day| DailySpendingPoint {
                date: day_label(day),
                amount: round_amount(per_day.get(&day).copied().unwrap_or(0.0)),
            })
            .collect())
    }
}

impl DashboardServiceTrait for DashboardService {
    fn get_dashboard(&self, user_id: &str) -> Result<DashboardStats> {
        self.get_dashboard_as_of(user_id, today_local())
    }

    fn get_dashboard_as_of(&self, user_id: &str, today: NaiveDate) -> Result<DashboardStats> {
        debug!("Computing dashboard for user {} as of {}", user_id, today);
        let month = DateWindow::month_of(today);
        let repo = &self.transaction_repository;

        let monthly_income =
            round_amount(repo.sum_amount(user_id, TransactionType::Income, &month, None)?);
        let monthly_expenses =
            round_amount(repo.sum_amount(user_id, TransactionType::Expense, &month, None)?);

        Ok(DashboardStats {
            monthly_income,
            monthly_expenses,
            monthly_balance: monthly_income - monthly_expenses,
            total_transactions: repo.count_for_user(user_id)?,
            charts: DashboardCharts {
                monthly_summary: self.monthly_summary(user_id, today)?,
                category_spending: self.category_spending(user_id, &month)?,
                daily_spending: self.daily_spending(user_id, today)?,
            },
        })
    }
}
