//! Category domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::Error;
use crate::transactions::TransactionType;

/// Domain model representing a user-defined category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub color: String,
    pub icon: Option<String>,
    #[serde(rename = "type")]
    pub category_type: TransactionType,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Validated input for inserting a category
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub user_id: String,
    pub name: String,
    pub color: String,
    pub icon: Option<String>,
    pub category_type: TransactionType,
}

/// Raw create request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInput {
    pub name: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
    #[serde(rename = "type")]
    pub category_type: Option<String>,
}

/// Error returned when a category still has transactions attached.
pub fn category_in_use(count: i64) -> Error {
    Error::invalid_input(format!(
        "Category is used by {count} transaction(s) and cannot be deleted"
    ))
}
