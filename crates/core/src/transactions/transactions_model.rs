//! Transaction domain models.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::categories::Category;
use crate::errors::Error;
use crate::utils::NumberInput;

/// Direction of a money movement. Categories carry the same marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "INCOME",
            TransactionType::Expense => "EXPENSE",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "INCOME" => Ok(TransactionType::Income),
            "EXPENSE" => Ok(TransactionType::Expense),
            other => Err(Error::invalid_input(format!(
                "Type must be INCOME or EXPENSE, got '{other}'"
            ))),
        }
    }
}

/// Domain model representing a stored transaction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    pub category_id: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub description: String,
    pub date: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A transaction with its category populated, as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionWithCategory {
    #[serde(flatten)]
    pub transaction: Transaction,
    pub category: Option<Category>,
}

/// Validated input for inserting a transaction
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub user_id: String,
    pub category_id: String,
    pub amount: f64,
    pub transaction_type: TransactionType,
    pub description: String,
    pub date: NaiveDateTime,
}

/// Raw create request. Every field is required; `amount` may be a number
/// or a numeric string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionInput {
    pub amount: Option<NumberInput>,
    #[serde(rename = "type")]
    pub transaction_type: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub category_id: Option<String>,
}

/// Expense total for one category, used by the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub name: String,
    pub color: String,
    pub total: f64,
}
