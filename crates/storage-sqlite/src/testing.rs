//! Helpers for repository tests backed by a temporary SQLite file.

use std::sync::Arc;

use tempfile::{tempdir, TempDir};

use fintrack_core::users::{NewUser, User, UserRepositoryTrait};

use crate::db::{create_pool, init, run_migrations, spawn_writer, DbPool, WriteHandle};
use crate::users::UserRepository;

pub struct TestDb {
    pub pool: Arc<DbPool>,
    pub writer: WriteHandle,
    // Keeps the database directory alive for the duration of the test.
    _dir: TempDir,
}

pub fn test_db() -> TestDb {
    let dir = tempdir().expect("Failed to create temp directory");
    let db_path = dir.path().join("test.db").to_string_lossy().to_string();
    init(&db_path).expect("Failed to initialise database");
    let pool = create_pool(&db_path).expect("Failed to create pool");
    run_migrations(&pool).expect("Failed to run migrations");
    let writer = spawn_writer((*pool).clone());
    TestDb {
        pool,
        writer,
        _dir: dir,
    }
}

impl TestDb {
    pub async fn user(&self, email: &str) -> User {
        UserRepository::new(self.pool.clone(), self.writer.clone())
            .insert(NewUser {
                name: "Test User".to_string(),
                email: email.to_string(),
                password_hash: "not-a-real-hash".to_string(),
            })
            .await
            .expect("Failed to insert user")
    }
}
