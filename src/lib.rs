//! Inventory API: an items CRUD resource over SQLite plus request payload examples.

pub mod config;
pub mod error;
pub mod extractors;
pub mod model;
pub mod response;
pub mod sql;
pub mod state;
pub mod store;
pub mod service;
pub mod handlers;
pub mod routes;
pub mod telemetry;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use model::{Item, ItemPatch, NewItem, Page, ReplaceItem};
pub use state::AppState;
pub use store::{connect_pool, ensure_items_table};
pub use routes::{app_router, item_routes, ops_routes, payload_routes};
pub use service::ItemStore;
pub use telemetry::init_tracing;
