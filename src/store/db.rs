//! Store handle and schema creation.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Handle to the SQLite database backing the API
#[derive(Clone)]
pub struct Store {
    pub(crate) pool: SqlitePool,
}

impl Store {
    /// Open a database (created if missing) and ensure the schema exists
    pub async fn open(path: &str) -> Result<Self, sqlx::Error> {
        // Options set here reach every pooled connection
        let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", path))?
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;
        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    /// Open a throwaway in-memory database
    pub async fn open_in_memory() -> Result<Self, sqlx::Error> {
        Self::open(":memory:").await
    }

    async fn migrate(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS topics (
                slug        TEXT PRIMARY KEY,
                description TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS users (
                username   TEXT PRIMARY KEY,
                name       TEXT NOT NULL,
                avatar_url TEXT
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS articles (
                article_id INTEGER PRIMARY KEY AUTOINCREMENT,
                title      TEXT NOT NULL,
                topic      TEXT NOT NULL REFERENCES topics(slug),
                author     TEXT NOT NULL REFERENCES users(username),
                body       TEXT NOT NULL,
                created_at TEXT NOT NULL,
                votes      INTEGER NOT NULL DEFAULT 0
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS comments (
                comment_id INTEGER PRIMARY KEY AUTOINCREMENT,
                article_id INTEGER NOT NULL REFERENCES articles(article_id) ON DELETE CASCADE,
                author     TEXT NOT NULL REFERENCES users(username),
                body       TEXT NOT NULL,
                votes      INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_comments_article ON comments(article_id)")
            .execute(&self.pool)
            .await?;

        tracing::debug!("schema ready");
        Ok(())
    }
}
