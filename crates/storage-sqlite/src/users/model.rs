//! Database models for users.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use fintrack_core::users::{NotificationSettings, User};

#[derive(Queryable, Identifiable, Selectable, Insertable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserDB {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: String,
    pub currency: String,
    pub timezone: String,
    pub avatar: Option<String>,
    pub notify_email: bool,
    pub notify_push: bool,
    pub notify_sms: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Profile columns written by an update. `None` leaves a column untouched.
#[derive(AsChangeset, Debug, Clone, Default)]
#[diesel(table_name = crate::schema::users)]
pub struct UserProfileChangeset {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub currency: Option<String>,
    pub timezone: Option<String>,
    pub avatar: Option<String>,
    pub notify_email: Option<bool>,
    pub notify_push: Option<bool>,
    pub notify_sms: Option<bool>,
    pub updated_at: Option<NaiveDateTime>,
}

impl From<UserDB> for User {
    fn from(db: UserDB) -> Self {
        User {
            id: db.id,
            name: db.name,
            email: db.email,
            password_hash: db.password_hash,
            phone: db.phone,
            currency: db.currency,
            timezone: db.timezone,
            avatar: db.avatar,
            notifications: NotificationSettings {
                email: db.notify_email,
                push: db.notify_push,
                sms: db.notify_sms,
            },
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}
