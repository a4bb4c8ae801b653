use super::{Registration, UserRepository};
use crate::db::init_users_db;
use crate::types::error::Result;
use crate::types::user::{ChatProfile, User};
use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use std::path::Path;
use tracing::{debug, info};

#[derive(Clone)]
pub struct SqliteUserStore {
    pool: SqlitePool,
}

impl SqliteUserStore {
    pub async fn new(db_path: &Path) -> anyhow::Result<Self> {
        let pool = init_users_db(db_path).await?;
        Ok(Self { pool })
    }

    pub async fn count(&self) -> Result<i64> {
        let row = sqlx::query("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.get(0))
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    fn row_to_user(row: SqliteRow) -> User {
        User {
            chat_id: row.get(0),
            first_name: row.get(1),
            last_name: row.get(2),
            user_name: row.get(3),
            registered_at: row.get(4),
        }
    }
}

fn now_millis() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}

#[async_trait]
impl UserRepository for SqliteUserStore {
    async fn find(&self, chat_id: i64) -> Result<Option<User>> {
        let row = sqlx::query(
            "SELECT chat_id, first_name, last_name, user_name, registered_at
             FROM users WHERE chat_id = ?",
        )
        .bind(chat_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Self::row_to_user))
    }

    async fn register_if_absent(
        &self,
        chat_id: i64,
        profile: &ChatProfile,
    ) -> Result<Registration> {
        if self.find(chat_id).await?.is_some() {
            debug!(chat_id = chat_id, "User already registered");
            return Ok(Registration::AlreadyRegistered);
        }

        let user = User::register(chat_id, profile, now_millis());

        // A concurrent /start for the same chat may have won the insert since
        // the lookup; the primary key keeps the first row.
        let result = sqlx::query(
            "INSERT INTO users (chat_id, first_name, last_name, user_name, registered_at)
             VALUES (?, ?, ?, ?, ?)
             ON CONFLICT(chat_id) DO NOTHING",
        )
        .bind(user.chat_id)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.user_name)
        .bind(user.registered_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            debug!(chat_id = chat_id, "Lost registration race, keeping existing user");
            return Ok(Registration::AlreadyRegistered);
        }

        info!(
            chat_id = user.chat_id,
            user_name = ?user.user_name,
            registered_at = user.registered_at,
            "User saved"
        );
        Ok(Registration::Created(user))
    }
}
