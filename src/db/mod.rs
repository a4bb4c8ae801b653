use anyhow::Result;
use sqlx::sqlite::SqlitePool;
use std::path::Path;

/// Initialize the user database with the users table
pub async fn init_users_db(db_path: &Path) -> Result<SqlitePool> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let url = format!("sqlite:{}?mode=rwc", db_path.display());
    let pool = SqlitePool::connect(&url).await?;

    sqlx::query("PRAGMA journal_mode=WAL;")
        .execute(&pool)
        .await?;

    let migration = include_str!("../../migrations/001_create_users_table.sql");
    sqlx::query(migration).execute(&pool).await?;

    Ok(pool)
}
