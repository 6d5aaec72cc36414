//! In-memory repositories shared by the service unit tests.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime, Utc};
use std::collections::HashMap;
use std::sync::Mutex;

use crate::budgets::{Budget, BudgetRepositoryTrait, NewBudget};
use crate::categories::{category_in_use, Category, CategoryRepositoryTrait, NewCategory};
use crate::errors::{DatabaseError, Error, Result};
use crate::goals::{Goal, GoalRepositoryTrait, NewGoal};
use crate::transactions::{
    CategoryTotal, NewTransaction, Transaction, TransactionRepositoryTrait, TransactionType,
    TransactionWithCategory,
};
use crate::utils::DateWindow;

#[derive(Default)]
pub struct InMemoryStore {
    next_id: Mutex<u32>,
    pub categories: Mutex<Vec<Category>>,
    pub transactions: Mutex<Vec<Transaction>>,
    pub budgets: Mutex<Vec<Budget>>,
    pub goals: Mutex<Vec<Goal>>,
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn at_noon(y: i32, m: u32, d: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(12, 0, 0).unwrap()
}

impl InMemoryStore {
    fn id(&self, prefix: &str) -> String {
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        format!("{prefix}-{next}")
    }

    fn now() -> NaiveDateTime {
        Utc::now().naive_utc()
    }

    fn populate(&self, transaction: Transaction) -> TransactionWithCategory {
        let category = self
            .categories
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == transaction.category_id)
            .cloned();
        TransactionWithCategory {
            transaction,
            category,
        }
    }

    /// Inserts a transaction directly, bypassing service validation.
    pub fn seed_transaction(
        &self,
        user_id: &str,
        category_id: &str,
        transaction_type: TransactionType,
        amount: f64,
        date: NaiveDateTime,
    ) -> Transaction {
        let now = Self::now();
        let transaction = Transaction {
            id: self.id("tx"),
            user_id: user_id.to_string(),
            category_id: category_id.to_string(),
            amount,
            transaction_type,
            description: "seeded".to_string(),
            date,
            created_at: now,
            updated_at: now,
        };
        self.transactions.lock().unwrap().push(transaction.clone());
        transaction
    }

    pub fn seed_category(
        &self,
        user_id: &str,
        name: &str,
        color: &str,
        category_type: TransactionType,
    ) -> Category {
        let now = Self::now();
        let category = Category {
            id: self.id("cat"),
            user_id: user_id.to_string(),
            name: name.to_string(),
            color: color.to_string(),
            icon: None,
            category_type,
            created_at: now,
            updated_at: now,
        };
        self.categories.lock().unwrap().push(category.clone());
        category
    }
}

#[async_trait]
impl CategoryRepositoryTrait for InMemoryStore {
    fn list_for_user(&self, user_id: &str) -> Result<Vec<Category>> {
        let mut list: Vec<Category> = self
            .categories
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect();
        list.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(list)
    }

    fn get_for_user(&self, user_id: &str, id: &str) -> Result<Option<Category>> {
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.user_id == user_id && c.id == id)
            .cloned())
    }

    async fn insert(&self, new_category: NewCategory) -> Result<Category> {
        let duplicate = self
            .categories
            .lock()
            .unwrap()
            .iter()
            .any(|c| c.user_id == new_category.user_id && c.name == new_category.name);
        if duplicate {
            return Err(Error::Database(DatabaseError::UniqueViolation(
                "categories.user_id, categories.name".to_string(),
            )));
        }
        let now = Self::now();
        let category = Category {
            id: self.id("cat"),
            user_id: new_category.user_id,
            name: new_category.name,
            color: new_category.color,
            icon: new_category.icon,
            category_type: new_category.category_type,
            created_at: now,
            updated_at: now,
        };
        self.categories.lock().unwrap().push(category.clone());
        Ok(category)
    }

    async fn delete_for_user(&self, user_id: &str, id: &str) -> Result<usize> {
        let in_use = self.count_for_category(user_id, id)?;
        if in_use > 0 {
            return Err(category_in_use(in_use));
        }
        let mut categories = self.categories.lock().unwrap();
        let before = categories.len();
        categories.retain(|c| !(c.user_id == user_id && c.id == id));
        Ok(before - categories.len())
    }
}

#[async_trait]
impl TransactionRepositoryTrait for InMemoryStore {
    fn list_for_user(&self, user_id: &str) -> Result<Vec<TransactionWithCategory>> {
        let mut owned: Vec<Transaction> = self
            .transactions
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(owned.into_iter().map(|t| self.populate(t)).collect())
    }

    fn get_for_user(&self, user_id: &str, id: &str) -> Result<Option<TransactionWithCategory>> {
        let found = self
            .transactions
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.user_id == user_id && t.id == id)
            .cloned();
        Ok(found.map(|t| self.populate(t)))
    }

    async fn insert(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        let now = Self::now();
        let transaction = Transaction {
            id: self.id("tx"),
            user_id: new_transaction.user_id,
            category_id: new_transaction.category_id,
            amount: new_transaction.amount,
            transaction_type: new_transaction.transaction_type,
            description: new_transaction.description,
            date: new_transaction.date,
            created_at: now,
            updated_at: now,
        };
        self.transactions.lock().unwrap().push(transaction.clone());
        Ok(transaction)
    }

    async fn delete_for_user(&self, user_id: &str, id: &str) -> Result<usize> {
        let mut transactions = self.transactions.lock().unwrap();
        let before = transactions.len();
        transactions.retain(|t| !(t.user_id == user_id && t.id == id));
        Ok(before - transactions.len())
    }

    fn count_for_user(&self, user_id: &str) -> Result<i64> {
        Ok(self
            .transactions
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.user_id == user_id)
            .count() as i64)
    }

    fn count_for_category(&self, user_id: &str, category_id: &str) -> Result<i64> {
        Ok(self
            .transactions
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.user_id == user_id && t.category_id == category_id)
            .count() as i64)
    }

    fn sum_amount(
        &self,
        user_id: &str,
        transaction_type: TransactionType,
        window: &DateWindow,
        category_id: Option<&str>,
    ) -> Result<f64> {
        Ok(self
            .transactions
            .lock()
            .unwrap()
            .iter()
            .filter(|t| {
                t.user_id == user_id
                    && t.transaction_type == transaction_type
                    && window.contains(t.date)
                    && category_id.map_or(true, |c| t.category_id == c)
            })
            .map(|t| t.amount)
            .sum())
    }

    fn expense_totals_by_category(
        &self,
        user_id: &str,
        window: &DateWindow,
    ) -> Result<Vec<CategoryTotal>> {
        let categories = self.categories.lock().unwrap().clone();
        let mut totals: HashMap<(String, String), f64> = HashMap::new();
        for t in self.transactions.lock().unwrap().iter().filter(|t| {
            t.user_id == user_id
                && t.transaction_type == TransactionType::Expense
                && window.contains(t.date)
        }) {
            if let Some(category) = categories.iter().find(|c| c.id == t.category_id) {
                *totals
                    .entry((category.name.clone(), category.color.clone()))
                    .or_insert(0.0) += t.amount;
            }
        }
        Ok(totals
            .into_iter()
            .map(|((name, color), total)| CategoryTotal { name, color, total })
            .collect())
    }

    fn amounts_in_window(
        &self,
        user_id: &str,
        transaction_type: TransactionType,
        window: &DateWindow,
    ) -> Result<Vec<(NaiveDateTime, f64)>> {
        Ok(self
            .transactions
            .lock()
            .unwrap()
            .iter()
            .filter(|t| {
                t.user_id == user_id
                    && t.transaction_type == transaction_type
                    && window.contains(t.date)
            })
            .map(|t| (t.date, t.amount))
            .collect())
    }
}

#[async_trait]
impl BudgetRepositoryTrait for InMemoryStore {
    fn list_for_user(&self, user_id: &str) -> Result<Vec<Budget>> {
        let mut list: Vec<Budget> = self
            .budgets
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect();
        list.reverse();
        Ok(list)
    }

    async fn insert(&self, new_budget: NewBudget) -> Result<Budget> {
        let now = Self::now();
        let budget = Budget {
            id: self.id("budget"),
            user_id: new_budget.user_id,
            name: new_budget.name,
            amount: new_budget.amount,
            period: new_budget.period,
            start_date: new_budget.start_date,
            end_date: new_budget.end_date,
            category_id: new_budget.category_id,
            created_at: now,
            updated_at: now,
        };
        self.budgets.lock().unwrap().push(budget.clone());
        Ok(budget)
    }

    async fn delete_for_user(&self, user_id: &str, id: &str) -> Result<usize> {
        let mut budgets = self.budgets.lock().unwrap();
        let before = budgets.len();
        budgets.retain(|b| !(b.user_id == user_id && b.id == id));
        Ok(before - budgets.len())
    }
}

#[async_trait]
impl GoalRepositoryTrait for InMemoryStore {
    fn list_for_user(&self, user_id: &str) -> Result<Vec<Goal>> {
        let mut list: Vec<Goal> = self
            .goals
            .lock()
            .unwrap()
            .iter()
            .filter(|g| g.user_id == user_id)
            .cloned()
            .collect();
        list.sort_by_key(|g| g.deadline);
        Ok(list)
    }

    fn get_for_user(&self, user_id: &str, id: &str) -> Result<Option<Goal>> {
        Ok(self
            .goals
            .lock()
            .unwrap()
            .iter()
            .find(|g| g.user_id == user_id && g.id == id)
            .cloned())
    }

    async fn insert(&self, new_goal: NewGoal) -> Result<Goal> {
        let now = Self::now();
        let goal = Goal {
            id: self.id("goal"),
            user_id: new_goal.user_id,
            name: new_goal.name,
            target_amount: new_goal.target_amount,
            current_amount: new_goal.current_amount,
            deadline: new_goal.deadline,
            status: new_goal.status,
            description: new_goal.description,
            category: new_goal.category,
            version: 1,
            created_at: now,
            updated_at: now,
        };
        self.goals.lock().unwrap().push(goal.clone());
        Ok(goal)
    }

    async fn update(&self, goal: Goal, expected_version: i32) -> Result<Goal> {
        let mut goals = self.goals.lock().unwrap();
        let stored = goals
            .iter_mut()
            .find(|g| g.user_id == goal.user_id && g.id == goal.id)
            .ok_or_else(|| Error::not_found("Goal not found"))?;
        if stored.version != expected_version {
            return Err(Error::Conflict("Goal was modified by another request".into()));
        }
        *stored = Goal {
            version: expected_version + 1,
            ..goal
        };
        Ok(stored.clone())
    }

    async fn delete_for_user(&self, user_id: &str, id: &str) -> Result<usize> {
        let mut goals = self.goals.lock().unwrap();
        let before = goals.len();
        goals.retain(|g| !(g.user_id == user_id && g.id == id));
        Ok(before - goals.len())
    }
}
