//! Item CRUD against SQLite. Absence is a normal result (`None` / `false`), never an error.

use crate::error::AppError;
use crate::model::{Item, ItemPatch, Page};
use crate::sql::{self, QueryBuf, SqlValue};
use sqlx::sqlite::{SqliteArguments, SqlitePool};
use sqlx::{query::QueryAs, Sqlite};

/// Owns the items table. Cloning shares the underlying pool.
#[derive(Clone)]
pub struct ItemStore {
    pool: SqlitePool,
}

impl ItemStore {
    pub fn new(pool: SqlitePool) -> Self {
        ItemStore { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Insert one row. The returned item carries the newly assigned id.
    pub async fn create(&self, name: &str, quantity: i64) -> Result<Item, AppError> {
        let q = sql::insert(name, quantity);
        let item = self
            .fetch_optional(&q)
            .await?
            .ok_or(AppError::Db(sqlx::Error::RowNotFound))?;
        tracing::info!(id = item.id, "item created");
        Ok(item)
    }

    pub async fn get(&self, id: i64) -> Result<Option<Item>, AppError> {
        self.fetch_optional(&sql::select_by_id(id)).await
    }

    /// Rows in id order, sliced by the page.
    pub async fn list(&self, page: Page) -> Result<Vec<Item>, AppError> {
        let q = sql::select_page(page);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let rows = bind_all(sqlx::query_as::<_, Item>(&q.sql), &q.params)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let q = sql::count();
        tracing::debug!(sql = %q.sql, "query");
        let n: i64 = sqlx::query_scalar(&q.sql).fetch_one(&self.pool).await?;
        Ok(n)
    }

    /// Overwrite name and quantity. `None` if the id does not exist; never inserts.
    pub async fn replace(&self, id: i64, name: &str, quantity: i64) -> Result<Option<Item>, AppError> {
        let row = self.fetch_optional(&sql::replace(id, name, quantity)).await?;
        if row.is_some() {
            tracing::info!(id, "item replaced");
        }
        Ok(row)
    }

    /// Apply only the supplied fields. An empty patch reads the row unchanged.
    pub async fn merge(&self, id: i64, patch: &ItemPatch) -> Result<Option<Item>, AppError> {
        let q = match sql::merge(id, patch) {
            Some(q) => q,
            None => return self.get(id).await,
        };
        let row = self.fetch_optional(&q).await?;
        if row.is_some() {
            tracing::info!(id, "item merged");
        }
        Ok(row)
    }

    /// Remove the row if present. Returns whether it existed.
    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let q = sql::delete(id);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query::<Sqlite>(&q.sql);
        for p in &q.params {
            query = match p {
                SqlValue::Int(n) => query.bind(*n),
                SqlValue::Text(s) => query.bind(s.clone()),
            };
        }
        let existed = query.execute(&self.pool).await?.rows_affected() > 0;
        tracing::info!(id, existed, "item delete");
        Ok(existed)
    }

    async fn fetch_optional(&self, q: &QueryBuf) -> Result<Option<Item>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let row = bind_all(sqlx::query_as::<_, Item>(&q.sql), &q.params)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }
}

fn bind_all<'q>(
    mut query: QueryAs<'q, Sqlite, Item, SqliteArguments<'q>>,
    params: &[SqlValue],
) -> QueryAs<'q, Sqlite, Item, SqliteArguments<'q>> {
    for p in params {
        query = match p {
            SqlValue::Int(n) => query.bind(*n),
            SqlValue::Text(s) => query.bind(s.clone()),
        };
    }
    query
}
