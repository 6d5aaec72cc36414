use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use fintrack_core::categories::{category_in_use, Category, CategoryRepositoryTrait, NewCategory};
use fintrack_core::Result;

use super::model::CategoryDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::{categories, transactions};

pub struct CategoryRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl CategoryRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        CategoryRepository { pool, writer }
    }
}

#[async_trait]
impl CategoryRepositoryTrait for CategoryRepository {
    fn list_for_user(&self, user_id: &str) -> Result<Vec<Category>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = categories::table
            .filter(categories::user_id.eq(user_id))
            .order(categories::name.asc())
            .select(CategoryDB::as_select())
            .load::<CategoryDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(Category::from).collect())
    }

    fn get_for_user(&self, user_id: &str, id: &str) -> Result<Option<Category>> {
        let mut conn = get_connection(&self.pool)?;
        let row = categories::table
            .filter(categories::id.eq(id))
            .filter(categories::user_id.eq(user_id))
            .select(CategoryDB::as_select())
            .first::<CategoryDB>(&mut conn)
            .optional()
            .into_core()?;
        Ok(row.map(Category::from))
    }

    async fn insert(&self, new_category: NewCategory) -> Result<Category> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Category> {
                let now = Utc::now().naive_utc();
                let row = CategoryDB {
                    id: Uuid::new_v4().to_string(),
                    user_id: new_category.user_id,
                    name: new_category.name,
                    color: new_category.color,
                    icon: new_category.icon,
                    category_type: new_category.category_type.as_str().to_string(),
                    created_at: now,
                    updated_at: now,
                };
                let inserted = diesel::insert_into(categories::table)
                    .values(&row)
                    .returning(CategoryDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Category::from(inserted))
            })
            .await
    }

    async fn delete_for_user(&self, user_id: &str, id: &str) -> Result<usize> {
        let user_id = user_id.to_string();
        let id = id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let in_use: i64 = transactions::table
                    .filter(transactions::category_id.eq(&id))
                    .count()
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                if in_use > 0 {
                    return Err(category_in_use(in_use));
                }
                Ok(diesel::delete(
                    categories::table
                        .filter(categories::id.eq(id))
                        .filter(categories::user_id.eq(user_id)),
                )
                .execute(conn)
                .map_err(StorageError::from)?)
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::test_db;
    use crate::transactions::TransactionRepository;
    use fintrack_core::transactions::{NewTransaction, TransactionRepositoryTrait, TransactionType};

    fn category(user_id: &str, name: &str) -> NewCategory {
        NewCategory {
            user_id: user_id.to_string(),
            name: name.to_string(),
            color: "#F59E0B".to_string(),
            icon: None,
            category_type: TransactionType::Expense,
        }
    }

    #[tokio::test]
    async fn name_is_unique_per_user() {
        let db = test_db();
        let alice = db.user("alice@example.com").await;
        let bob = db.user("bob@example.com").await;
        let repo = CategoryRepository::new(db.pool.clone(), db.writer.clone());

        repo.insert(category(&alice.id, "Food")).await.unwrap();
        let err = repo.insert(category(&alice.id, "Food")).await.unwrap_err();
        assert!(err.is_unique_violation());

        repo.insert(category(&bob.id, "Food")).await.unwrap();
        assert_eq!(repo.list_for_user(&alice.id).unwrap().len(), 1);
        assert_eq!(repo.list_for_user(&bob.id).unwrap().len(), 1);
    }

    #[tokio::test]
    async fn lookups_are_owner_scoped() {
        let db = test_db();
        let alice = db.user("alice@example.com").await;
        let bob = db.user("bob@example.com").await;
        let repo = CategoryRepository::new(db.pool.clone(), db.writer.clone());

        let food = repo.insert(category(&alice.id, "Food")).await.unwrap();
        assert_eq!(food.category_type, TransactionType::Expense);
        assert!(repo.get_for_user(&bob.id, &food.id).unwrap().is_none());
        assert_eq!(repo.delete_for_user(&bob.id, &food.id).await.unwrap(), 0);
        assert_eq!(repo.delete_for_user(&alice.id, &food.id).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn delete_keeps_category_with_transactions() {
        let db = test_db();
        let alice = db.user("alice@example.com").await;
        let repo = CategoryRepository::new(db.pool.clone(), db.writer.clone());
        let transactions = TransactionRepository::new(db.pool.clone(), db.writer.clone());

        let food = repo.insert(category(&alice.id, "Food")).await.unwrap();
        transactions
            .insert(NewTransaction {
                user_id: alice.id.clone(),
                category_id: food.id.clone(),
                amount: 12.0,
                transaction_type: TransactionType::Expense,
                description: "Lunch".to_string(),
                date: Utc::now().naive_utc(),
            })
            .await
            .unwrap();

        let err = repo.delete_for_user(&alice.id, &food.id).await.unwrap_err();
        assert!(matches!(err, fintrack_core::Error::Validation(_)));
        assert!(repo.get_for_user(&alice.id, &food.id).unwrap().is_some());
        assert_eq!(transactions.count_for_user(&alice.id).unwrap(), 1);
    }
}
