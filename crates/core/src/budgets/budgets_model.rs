//! Budget domain models.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::errors::Error;
use crate::utils::{round_amount, NumberInput};

/// Label for the validity window of a budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BudgetPeriod {
    Monthly,
    Yearly,
    Custom,
}

impl BudgetPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetPeriod::Monthly => "MONTHLY",
            BudgetPeriod::Yearly => "YEARLY",
            BudgetPeriod::Custom => "CUSTOM",
        }
    }
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BudgetPeriod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MONTHLY" => Ok(BudgetPeriod::Monthly),
            "YEARLY" => Ok(BudgetPeriod::Yearly),
            "CUSTOM" => Ok(BudgetPeriod::Custom),
            other => Err(Error::invalid_input(format!(
                "Period must be MONTHLY, YEARLY or CUSTOM, got '{other}'"
            ))),
        }
    }
}

/// Domain model representing a stored budget
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub amount: f64,
    pub period: BudgetPeriod,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub category_id: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A budget together with the spending recorded against it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetWithUsage {
    #[serde(flatten)]
    pub budget: Budget,
    pub spent: f64,
    pub remaining: f64,
    pub percentage_spent: f64,
}

impl BudgetWithUsage {
    pub fn new(budget: Budget, spent: f64) -> Self {
        let percentage_spent = if budget.amount > 0.0 {
            round_amount(spent / budget.amount * 100.0)
        } else {
            0.0
        };
        Self {
            remaining: round_amount(budget.amount - spent),
            spent: round_amount(spent),
            percentage_spent,
            budget,
        }
    }
}

/// Validated input for inserting a budget
#[derive(Debug, Clone)]
pub struct NewBudget {
    pub user_id: String,
    pub name: String,
    pub amount: f64,
    pub period: BudgetPeriod,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub category_id: Option<String>,
}

/// Raw create request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetInput {
    pub name: Option<String>,
    pub amount: Option<NumberInput>,
    pub period: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub category_id: Option<String>,
}
