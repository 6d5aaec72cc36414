//! Goals domain models.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::errors::Error;
use crate::utils::NumberInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalStatus {
    #[default]
    InProgress,
    Completed,
}

impl GoalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalStatus::InProgress => "IN_PROGRESS",
            GoalStatus::Completed => "COMPLETED",
        }
    }

    /// A goal is completed once the saved amount reaches the target, or when
    /// the user marks it as such.
    pub fn derive(current_amount: f64, target_amount: f64, requested: Option<GoalStatus>) -> Self {
        if requested == Some(GoalStatus::Completed) || current_amount >= target_amount {
            GoalStatus::Completed
        } else {
            GoalStatus::InProgress
        }
    }
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GoalStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "IN_PROGRESS" => Ok(GoalStatus::InProgress),
            "COMPLETED" => Ok(GoalStatus::Completed),
            other => Err(Error::invalid_input(format!(
                "Status must be IN_PROGRESS or COMPLETED, got '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalCategory {
    #[default]
    Savings,
    Travel,
    Transportation,
    Home,
    Education,
    Other,
}

impl GoalCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalCategory::Savings => "SAVINGS",
            GoalCategory::Travel => "TRAVEL",
            GoalCategory::Transportation => "TRANSPORTATION",
            GoalCategory::Home => "HOME",
            GoalCategory::Education => "EDUCATION",
            GoalCategory::Other => "OTHER",
        }
    }
}

impl fmt::Display for GoalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GoalCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SAVINGS" => Ok(GoalCategory::Savings),
            "TRAVEL" => Ok(GoalCategory::Travel),
            "TRANSPORTATION" => Ok(GoalCategory::Transportation),
            "HOME" => Ok(GoalCategory::Home),
            "EDUCATION" => Ok(GoalCategory::Education),
            "OTHER" => Ok(GoalCategory::Other),
            other => Err(Error::invalid_input(format!("Unknown goal category '{other}'"))),
        }
    }
}

/// Domain model representing a savings goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub deadline: NaiveDate,
    pub status: GoalStatus,
    pub description: String,
    pub category: GoalCategory,
    /// Incremented on every update.
    pub version: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Validated input for inserting a goal
#[derive(Debug, Clone)]
pub struct NewGoal {
    pub user_id: String,
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub deadline: NaiveDate,
    pub status: GoalStatus,
    pub description: String,
    pub category: GoalCategory,
}

/// Raw create request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalInput {
    pub name: Option<String>,
    pub target_amount: Option<NumberInput>,
    pub current_amount: Option<NumberInput>,
    pub deadline: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
}

/// Partial update request. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalUpdate {
    pub name: Option<String>,
    pub target_amount: Option<NumberInput>,
    pub current_amount: Option<NumberInput>,
    pub deadline: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    /// When present, must match the stored version.
    pub version: Option<i32>,
}
