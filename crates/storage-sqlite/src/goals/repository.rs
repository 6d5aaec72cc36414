use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use log::debug;
use std::sync::Arc;
use uuid::Uuid;

use fintrack_core::goals::{Goal, GoalRepositoryTrait, NewGoal};
use fintrack_core::{Error, Result};

use super::model::GoalDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::goals;

pub struct GoalRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl GoalRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        GoalRepository { pool, writer }
    }
}

#[async_trait]
impl GoalRepositoryTrait for GoalRepository {
    fn list_for_user(&self, user_id: &str) -> Result<Vec<Goal>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = goals::table
            .filter(goals::user_id.eq(user_id))
            .order((goals::deadline.asc(), goals::created_at.asc()))
            .select(GoalDB::as_select())
            .load::<GoalDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(Goal::from).collect())
    }

    fn get_for_user(&self, user_id: &str, id: &str) -> Result<Option<Goal>> {
        let mut conn = get_connection(&self.pool)?;
        let row = goals::table
            .filter(goals::id.eq(id))
            .filter(goals::user_id.eq(user_id))
            .select(GoalDB::as_select())
            .first::<GoalDB>(&mut conn)
            .optional()
            .into_core()?;
        Ok(row.map(Goal::from))
    }

    async fn insert(&self, new_goal: NewGoal) -> Result<Goal> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Goal> {
                let now = Utc::now().naive_utc();
                let row = GoalDB {
                    id: Uuid::new_v4().to_string(),
                    user_id: new_goal.user_id,
                    name: new_goal.name,
                    target_amount: new_goal.target_amount,
                    current_amount: new_goal.current_amount,
                    deadline: new_goal.deadline,
                    status: new_goal.status.as_str().to_string(),
                    description: new_goal.description,
                    category: new_goal.category.as_str().to_string(),
                    version: 1,
                    created_at: now,
                    updated_at: now,
                };
                let inserted = diesel::insert_into(goals::table)
                    .values(&row)
                    .returning(GoalDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Goal::from(inserted))
            })
            .await
    }

    async fn update(&self, goal: Goal, expected_version: i32) -> Result<Goal> {
        let mut row = GoalDB::from(goal);
        row.version = expected_version + 1;

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Goal> {
                let updated = diesel::update(
                    goals::table
                        .filter(goals::id.eq(&row.id))
                        .filter(goals::user_id.eq(&row.user_id))
                        .filter(goals::version.eq(expected_version)),
                )
                .set(&row)
                .returning(GoalDB::as_returning())
                .get_result(conn)
                .optional()
                .map_err(StorageError::from)?;

                match updated {
                    Some(updated) => Ok(Goal::from(updated)),
                    None => {
                        let exists = goals::table
                            .filter(goals::id.eq(&row.id))
                            .filter(goals::user_id.eq(&row.user_id))
                            .count()
                            .get_result::<i64>(conn)
                            .map_err(StorageError::from)?;
                        if exists == 0 {
                            Err(Error::not_found("Goal not found"))
                        } else {
                            debug!("Goal {} changed since version {}", row.id, expected_version);
                            Err(Error::Conflict(
                                "Goal was modified by another request".to_string(),
                            ))
                        }
                    }
                }
            })
            .await
    }

    async fn delete_for_user(&self, user_id: &str, id: &str) -> Result<usize> {
        let user_id = user_id.to_string();
        let id = id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(
                    goals::table
                        .filter(goals::id.eq(id))
                        .filter(goals::user_id.eq(user_id)),
                )
                .execute(conn)
                .map_err(StorageError::from)?)
            })
            .await
    }
}
