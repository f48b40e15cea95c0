//! Shared application state for all routes. The store wraps the one pool opened at startup.

use crate::service::ItemStore;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    pub store: ItemStore,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        AppState {
            store: ItemStore::new(pool),
        }
    }
}
