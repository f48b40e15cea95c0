//! Route tables and the assembled application router.

pub mod common;
pub mod items;
pub mod payload;

pub use common::ops_routes;
pub use items::item_routes;
pub use payload::payload_routes;

use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Every route of the service with request tracing and a body size limit.
pub fn app_router(state: AppState, body_limit_bytes: usize) -> Router {
    Router::new()
        .merge(ops_routes(state.clone()))
        .merge(payload_routes())
        .merge(item_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(body_limit_bytes)),
        )
}
