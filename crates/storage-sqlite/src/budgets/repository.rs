use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use fintrack_core::budgets::{Budget, BudgetRepositoryTrait, NewBudget};
use fintrack_core::Result;

use super::model::BudgetDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::budgets;

pub struct BudgetRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl BudgetRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        BudgetRepository { pool, writer }
    }
}

#[async_trait]
impl BudgetRepositoryTrait for BudgetRepository {
    fn list_for_user(&self, user_id: &str) -> Result<Vec<Budget>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = budgets::table
            .filter(budgets::user_id.eq(user_id))
            .order(budgets::created_at.desc())
            .select(BudgetDB::as_select())
            .load::<BudgetDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(Budget::from).collect())
    }

    async fn insert(&self, new_budget: NewBudget) -> Result<Budget> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Budget> {
                let now = Utc::now().naive_utc();
                let row = BudgetDB {
                    id: Uuid::new_v4().to_string(),
                    user_id: new_budget.user_id,
                    name: new_budget.name,
                    amount: new_budget.amount,
                    period: new_budget.period.as_str().to_string(),
                    start_date: new_budget.start_date,
                    end_date: new_budget.end_date,
                    category_id: new_budget.category_id,
                    created_at: now,
                    updated_at: now,
                };
                let inserted = diesel::insert_into(budgets::table)
                    .values(&row)
                    .returning(BudgetDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Budget::from(inserted))
            })
            .await
    }

    async fn delete_for_user(&self, user_id: &str, id: &str) -> Result<usize> {
        let user_id = user_id.to_string();
        let id = id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(
                    budgets::table
                        .filter(budgets::id.eq(id))
                        .filter(budgets::user_id.eq(user_id)),
                )
                .execute(conn)
                .map_err(StorageError::from)?)
            })
            .await
    }
}
