//! Database models for budgets.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use log::warn;

use fintrack_core::budgets::{Budget, BudgetPeriod};

#[derive(Queryable, Identifiable, Selectable, Insertable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::budgets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BudgetDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub amount: f64,
    pub period: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub category_id: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<BudgetDB> for Budget {
    fn from(db: BudgetDB) -> Self {
        let period = db.period.parse().unwrap_or_else(|_| {
            warn!("Unknown budget period '{}' for budget {}", db.period, db.id);
            BudgetPeriod::Custom
        });
        Budget {
            id: db.id,
            user_id: db.user_id,
            name: db.name,
            amount: db.amount,
            period,
            start_date: db.start_date,
            end_date: db.end_date,
            category_id: db.category_id,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}
