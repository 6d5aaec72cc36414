//! Database models for goals.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use log::warn;

use fintrack_core::goals::Goal;

/// Database model for goals
#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Debug, Clone,
)]
#[diesel(table_name = crate::schema::goals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct GoalDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub deadline: NaiveDate,
    pub status: String,
    pub description: String,
    pub category: String,
    pub version: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<GoalDB> for Goal {
    fn from(db: GoalDB) -> Self {
        let status = db.status.parse().unwrap_or_else(|_| {
            warn!("Unknown goal status '{}' for goal {}", db.status, db.id);
            Default::default()
        });
        let category = db.category.parse().unwrap_or_else(|_| {
            warn!("Unknown goal category '{}' for goal {}", db.category, db.id);
            Default::default()
        });
        Goal {
            id: db.id,
            user_id: db.user_id,
            name: db.name,
            target_amount: db.target_amount,
            current_amount: db.current_amount,
            deadline: db.deadline,
            status,
            description: db.description,
            category,
            version: db.version,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<Goal> for GoalDB {
    fn from(goal: Goal) -> Self {
        GoalDB {
            id: goal.id,
            user_id: goal.user_id,
            name: goal.name,
            target_amount: goal.target_amount,
            current_amount: goal.current_amount,
            deadline: goal.deadline,
            status: goal.status.as_str().to_string(),
            description: goal.description,
            category: goal.category.as_str().to_string(),
            version: goal.version,
            created_at: goal.created_at,
            updated_at: goal.updated_at,
        }
    }
}
