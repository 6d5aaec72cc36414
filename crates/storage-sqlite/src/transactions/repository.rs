use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use diesel::dsl::sum;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use fintrack_core::categories::Category;
use fintrack_core::transactions::{
    CategoryTotal, NewTransaction, Transaction, TransactionRepositoryTrait, TransactionType,
    TransactionWithCategory,
};
use fintrack_core::utils::DateWindow;
use fintrack_core::Result;

use super::model::TransactionDB;
use crate::categories::CategoryDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::{categories, transactions};

pub struct TransactionRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl TransactionRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        TransactionRepository { pool, writer }
    }

    fn load_with_categories(
        &self,
        user_id: &str,
        id: Option<&str>,
    ) -> Result<Vec<TransactionWithCategory>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = transactions::table
            .left_join(categories::table)
            .filter(transactions::user_id.eq(user_id))
            .order((transactions::date.desc(), transactions::created_at.desc()))
            .select((TransactionDB::as_select(), Option::<CategoryDB>::as_select()))
            .into_boxed();
        if let Some(id) = id {
            query = query.filter(transactions::id.eq(id));
        }
        let rows = query
            .load::<(TransactionDB, Option<CategoryDB>)>(&mut conn)
            .into_core()?;
        Ok(rows
            .into_iter()
            .map(|(transaction, category)| TransactionWithCategory {
                transaction: Transaction::from(transaction),
                category: category.map(Category::from),
            })
            .collect())
    }
}

#[async_trait]
impl TransactionRepositoryTrait for TransactionRepository {
    fn list_for_user(&self, user_id: &str) -> Result<Vec<TransactionWithCategory>> {
        self.load_with_categories(user_id, None)
    }

    fn get_for_user(&self, user_id: &str, id: &str) -> Result<Option<TransactionWithCategory>> {
        Ok(self.load_with_categories(user_id, Some(id))?.into_iter().next())
    }

    async fn insert(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Transaction> {
                let now = Utc::now().naive_utc();
                let row = TransactionDB {
                    id: Uuid::new_v4().to_string(),
                    user_id: new_transaction.user_id,
                    category_id: new_transaction.category_id,
                    amount: new_transaction.amount,
                    transaction_type: new_transaction.transaction_type.as_str().to_string(),
                    description: new_transaction.description,
                    date: new_transaction.date,
                    created_at: now,
                    updated_at: now,
                };
                let inserted = diesel::insert_into(transactions::table)
                    .values(&row)
                    .returning(TransactionDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Transaction::from(inserted))
            })
            .await
    }

    async fn delete_for_user(&self, user_id: &str, id: &str) -> Result<usize> {
        let user_id = user_id.to_string();
        let id = id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(
                    transactions::table
                        .filter(transactions::id.eq(id))
                        .filter(transactions::user_id.eq(user_id)),
                )
                .execute(conn)
                .map_err(StorageError::from)?)
            })
            .await
    }

    fn count_for_user(&self, user_id: &str) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        transactions::table
            .filter(transactions::user_id.eq(user_id))
            .count()
            .get_result::<i64>(&mut conn)
            .into_core()
    }

    fn count_for_category(&self, user_id: &str, category_id: &str) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        transactions::table
            .filter(transactions::user_id.eq(user_id))
            .filter(transactions::category_id.eq(category_id))
            .count()
            .get_result::<i64>(&mut conn)
            .into_core()
    }

    fn sum_amount(
        &self,
        user_id: &str,
        transaction_type: TransactionType,
        window: &DateWindow,
        category_id: Option<&str>,
    ) -> Result<f64> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = transactions::table
            .select(sum(transactions::amount))
            .filter(transactions::user_id.eq(user_id))
            .filter(transactions::transaction_type.eq(transaction_type.as_str()))
            .filter(transactions::date.ge(window.start_datetime()))
            .filter(transactions::date.lt(window.end_datetime()))
            .into_boxed();
        if let Some(category_id) = category_id {
            query = query.filter(transactions::category_id.eq(category_id));
        }
        let total: Option<f64> = query.get_result(&mut conn).into_core()?;
        Ok(total.unwrap_or(0.0))
    }

    fn expense_totals_by_category(
        &self,
        user_id: &str,
        window: &DateWindow,
    ) -> Result<Vec<CategoryTotal>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = transactions::table
            .inner_join(categories::table)
            .filter(transactions::user_id.eq(user_id))
            .filter(transactions::transaction_type.eq(TransactionType::Expense.as_str()))
            .filter(transactions::date.ge(window.start_datetime()))
            .filter(transactions::date.lt(window.end_datetime()))
            .group_by((categories::name, categories::color))
            .select((categories::name, categories::color, sum(transactions::amount)))
            .load::<(String, String, Option<f64>)>(&mut conn)
            .into_core()?;
        Ok(rows
            .into_iter()
            .map(|(name, color, total)| CategoryTotal {
                name,
                color,
                total: total.unwrap_or(0.0),
            })
            .collect())
    }

    fn amounts_in_window(
        &self,
        user_id: &str,
        transaction_type: TransactionType,
        window: &DateWindow,
    ) -> Result<Vec<(NaiveDateTime, f64)>> {
        let mut conn = get_connection(&self.pool)?;
        transactions::table
            .filter(transactions::user_id.eq(user_id))
            .filter(transactions::transaction_type.eq(transaction_type.as_str()))
            .filter(transactions::date.ge(window.start_datetime()))
            .filter(transactions::date.lt(window.end_datetime()))
            .select((transactions::date, transactions::amount))
            .load::<(NaiveDateTime, f64)>(&mut conn)
            .into_core()
    }
}
