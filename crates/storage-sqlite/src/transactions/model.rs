//! Database models for transactions.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use fintrack_core::transactions::Transaction;

use crate::categories::parse_type;

#[derive(Queryable, Identifiable, Selectable, Insertable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::transactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TransactionDB {
    pub id: String,
    pub user_id: String,
    pub category_id: String,
    pub amount: f64,
    pub transaction_type: String,
    pub description: String,
    pub date: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<TransactionDB> for Transaction {
    fn from(db: TransactionDB) -> Self {
        Transaction {
            transaction_type: parse_type(&db.transaction_type),
            id: db.id,
            user_id: db.user_id,
            category_id: db.category_id,
            amount: db.amount,
            description: db.description,
            date: db.date,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}
