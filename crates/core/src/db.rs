//! Store bootstrap
//!
//! Creates the SQLite connection pool and applies the schema. The DDL is
//! idempotent, so running it on every startup is safe.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::{Error, Result};

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

const CREATE_USERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id   INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL
)
"#;

const CREATE_TASKS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS tasks (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    title        TEXT NOT NULL,
    description  TEXT NOT NULL DEFAULT '',
    user_id      INTEGER NOT NULL,
    is_completed BOOLEAN NOT NULL DEFAULT FALSE
)
"#;

const CREATE_TASKS_USER_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_tasks_user_id ON tasks (user_id)";

/// Create a SQLite connection pool.
///
/// The database file is created if it does not exist. An in-memory URL
/// gets a single long-lived connection, since every SQLite connection to
/// `:memory:` opens its own private database.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool = if is_memory_url(database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await?
    };

    Ok(pool)
}

/// Apply the users/tasks schema.
pub async fn migrate(pool: &SqlitePool) -> Result<()> {
    for statement in [CREATE_USERS_TABLE, CREATE_TASKS_TABLE, CREATE_TASKS_USER_INDEX] {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|e| Error::Migration(e.to_string()))?;
    }
    tracing::debug!("Schema applied");
    Ok(())
}

/// Create a pool and apply the schema in one step.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let pool = create_pool(database_url, max_connections).await?;
    migrate(&pool).await?;
    Ok(pool)
}

fn is_memory_url(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

#[cfg(test)]
pub(crate) async fn memory_pool() -> SqlitePool {
    connect("sqlite::memory:", 1).await.unwrap()
}
