//! Database models for categories.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use log::warn;

use fintrack_core::categories::Category;
use fintrack_core::transactions::TransactionType;

#[derive(Queryable, Identifiable, Selectable, Insertable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CategoryDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub color: String,
    pub icon: Option<String>,
    pub category_type: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Parses a stored type marker. The column carries a CHECK constraint, so an
/// unknown value only appears if the file was edited by hand.
pub(crate) fn parse_type(raw: &str) -> TransactionType {
    raw.parse().unwrap_or_else(|_| {
        warn!("Unknown transaction type '{}' in database, treating as EXPENSE", raw);
        TransactionType::Expense
    })
}

impl From<CategoryDB> for Category {
    fn from(db: CategoryDB) -> Self {
        Category {
            category_type: parse_type(&db.category_type),
            id: db.id,
            user_id: db.user_id,
            name: db.name,
            color: db.color,
            icon: db.icon,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}
