//! SQLite pool bootstrap and items table DDL.
//! The database file is created on first connect; `ensure_items_table` is idempotent.

use crate::error::AppError;
use crate::sql::create_items_table;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// True for URLs that open a private in-memory database per connection.
fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Open the pool for `database_url`, creating the database file if it does not exist.
/// In-memory databases are pinned to a single long-lived connection so every query sees the same data.
pub async fn connect_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = if is_in_memory(database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(opts)
            .await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(opts)
            .await?
    };
    tracing::debug!(database_url = %database_url, "database pool opened");
    Ok(pool)
}

/// Create the items table if not exists.
pub async fn ensure_items_table(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query(&create_items_table()).execute(pool).await?;
    Ok(())
}
