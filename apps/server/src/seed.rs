//! Demo account with a handful of categories, recent transactions and
//! monthly budgets.

use std::collections::HashMap;

use anyhow::Context;
use chrono::{Days, NaiveDate};

use fintrack_core::budgets::BudgetInput;
use fintrack_core::categories::CategoryInput;
use fintrack_core::transactions::TransactionInput;
use fintrack_core::users::NewUser;
use fintrack_core::utils::{DateWindow, NumberInput};

use crate::main_lib::AppState;

pub const DEMO_NAME: &str = "John Doe";
pub const DEMO_EMAIL: &str = "john@example.com";
pub const DEMO_PASSWORD: &str = "password123";

const CATEGORIES: &[(&str, &str, &str)] = &[
    ("Salary", "#10B981", "INCOME"),
    ("Freelance", "#3B82F6", "INCOME"),
    ("Food & Dining", "#F59E0B", "EXPENSE"),
    ("Transportation", "#EF4444", "EXPENSE"),
    ("Shopping", "#8B5CF6", "EXPENSE"),
    ("Entertainment", "#EC4899", "EXPENSE"),
    ("Utilities", "#6B7280", "EXPENSE"),
    ("Healthcare", "#059669", "EXPENSE"),
];

/// (category, amount, type, description, days before today)
const TRANSACTIONS: &[(&str, f64, &str, &str, u64)] = &[
    ("Salary", 3500.0, "INCOME", "Monthly Salary", 0),
    ("Freelance", 500.0, "INCOME", "Freelance Project", 2),
    ("Food & Dining", 85.5, "EXPENSE", "Grocery Shopping", 1),
    ("Transportation", 45.0, "EXPENSE", "Gas Station", 2),
    ("Shopping", 120.0, "EXPENSE", "New Shoes", 3),
    ("Entertainment", 65.0, "EXPENSE", "Movie Night", 4),
    ("Utilities", 150.0, "EXPENSE", "Electricity Bill", 5),
    ("Healthcare", 75.0, "EXPENSE", "Doctor Visit", 6),
];

/// (name, amount, category)
const BUDGETS: &[(&str, f64, &str)] = &[
    ("Groceries", 300.0, "Food & Dining"),
    ("Entertainment", 200.0, "Entertainment"),
    ("Shopping", 500.0, "Shopping"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedSummary {
    pub user_id: String,
    pub categories: usize,
    pub transactions: usize,
    pub budgets: usize,
}

/// Recreates the demo account as of `today`. An existing demo account is
/// deleted first along with everything it owns.
pub async fn seed_demo_data(state: &AppState, today: NaiveDate) -> anyhow::Result<SeedSummary> {
    if let Some(existing) = state.user_service.find_by_email(DEMO_EMAIL)? {
        state.user_service.delete_user(&existing.id).await?;
        tracing::info!("Removed previous demo account {}", existing.id);
    }

    let password_hash = state
        .auth
        .hash_password(DEMO_PASSWORD)
        .map_err(|e| anyhow::anyhow!("Failed to hash demo password: {e:?}"))?;
    let user = state
        .user_service
        .register(NewUser {
            name: DEMO_NAME.to_string(),
            email: DEMO_EMAIL.to_string(),
            password_hash,
        })
        .await?;

    let mut category_ids = HashMap::new();
    for (name, color, kind) in CATEGORIES {
        let category = state
            .category_service
            .create_category(
                &user.id,
                CategoryInput {
                    name: Some(name.to_string()),
                    color: Some(color.to_string()),
                    icon: None,
                    category_type: Some(kind.to_string()),
                },
            )
            .await?;
        category_ids.insert(*name, category.id);
    }

    for (category, amount, kind, description, days_ago) in TRANSACTIONS {
        let date = today
            .checked_sub_days(Days::new(*days_ago))
            .context("Demo transaction date out of range")?;
        state
            .transaction_service
            .create_transaction(
                &user.id,
                TransactionInput {
                    amount: Some(NumberInput::Number(*amount)),
                    transaction_type: Some(kind.to_string()),
                    description: Some(description.to_string()),
                    date: Some(date.format("%Y-%m-%d").to_string()),
                    category_id: category_ids.get(category).cloned(),
                },
            )
            .await?;
    }

    let month = DateWindow::month_of(today);
    let month_end = month.end.pred_opt().unwrap_or(month.start);
    for (name, amount, category) in BUDGETS {
        state
            .budget_service
            .create_budget(
                &user.id,
                BudgetInput {
                    name: Some(name.to_string()),
                    amount: Some(NumberInput::Number(*amount)),
                    period: Some("MONTHLY".to_string()),
                    start_date: Some(month.start.format("%Y-%m-%d").to_string()),
                    end_date: Some(month_end.format("%Y-%m-%d").to_string()),
                    category_id: category_ids.get(category).cloned(),
                },
            )
            .await?;
    }

    tracing::info!("Seeded demo account {} ({})", DEMO_EMAIL, user.id);
    Ok(SeedSummary {
        user_id: user.id,
        categories: CATEGORIES.len(),
        transactions: TRANSACTIONS.len(),
        budgets: BUDGETS.len(),
    })
}
