use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use fintrack_core::constants::{DEFAULT_CURRENCY, DEFAULT_TIMEZONE};
use fintrack_core::users::{NewUser, NotificationSettings, ProfileUpdate, User, UserRepositoryTrait};
use fintrack_core::Result;

use super::model::{UserDB, UserProfileChangeset};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::users;

pub struct UserRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl UserRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        UserRepository { pool, writer }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    fn get_by_id(&self, user_id: &str) -> Result<Option<User>> {
        let mut conn = get_connection(&self.pool)?;
        let found = users::table
            .find(user_id)
            .select(UserDB::as_select())
            .first::<UserDB>(&mut conn)
            .optional()
            .into_core()?;
        Ok(found.map(User::from))
    }

    fn get_by_email(&self, email: &str) -> Result<Option<User>> {
        let mut conn = get_connection(&self.pool)?;
        let found = users::table
            .filter(users::email.eq(email))
            .select(UserDB::as_select())
            .first::<UserDB>(&mut conn)
            .optional()
            .into_core()?;
        Ok(found.map(User::from))
    }

    async fn insert(&self, new_user: NewUser) -> Result<User> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<User> {
                let now = Utc::now().naive_utc();
                let defaults = NotificationSettings::default();
                let row = UserDB {
                    id: Uuid::new_v4().to_string(),
                    name: new_user.name,
                    email: new_user.email,
                    password_hash: new_user.password_hash,
                    phone: String::new(),
                    currency: DEFAULT_CURRENCY.to_string(),
                    timezone: DEFAULT_TIMEZONE.to_string(),
                    avatar: None,
                    notify_email: defaults.email,
                    notify_push: defaults.push,
                    notify_sms: defaults.sms,
                    created_at: now,
                    updated_at: now,
                };
                let inserted = diesel::insert_into(users::table)
                    .values(&row)
                    .returning(UserDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(User::from(inserted))
            })
            .await
    }

    async fn update_profile(&self, user_id: &str, update: ProfileUpdate) -> Result<User> {
        let user_id = user_id.to_string();
        let changes = UserProfileChangeset {
            name: update.name,
            email: update.email,
            phone: update.phone,
            currency: update.currency,
            timezone: update.timezone,
            avatar: update.avatar,
            notify_email: update.notifications.map(|n| n.email),
            notify_push: update.notifications.map(|n| n.push),
            notify_sms: update.notifications.map(|n| n.sms),
            updated_at: Some(Utc::now().naive_utc()),
        };
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<User> {
                let updated = diesel::update(users::table.find(&user_id))
                    .set(&changes)
                    .returning(UserDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(User::from(updated))
            })
            .await
    }

    async fn update_password_hash(&self, user_id: &str, password_hash: String) -> Result<()> {
        let user_id = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                diesel::update(users::table.find(&user_id))
                    .set((
                        users::password_hash.eq(password_hash),
                        users::updated_at.eq(Utc::now().naive_utc()),
                    ))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }

    async fn delete(&self, user_id: &str) -> Result<usize> {
        let user_id = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(users::table.find(user_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
