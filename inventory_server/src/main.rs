//! Inventory server: loads settings from the environment, opens the SQLite pool, ensures the
//! items table exists and serves the API until Ctrl-C. The pool is closed after the listener drains.
//!
//! Run from repo root: `cargo run -p inventory-server`

use inventory_api::{
    app_router, connect_pool, ensure_items_table, init_tracing, AppError, AppState, ServerConfig,
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env().map_err(AppError::from)?;
    init_tracing();

    let pool = connect_pool(&config.database_url, config.max_connections).await?;
    ensure_items_table(&pool).await?;

    let state = AppState::new(pool.clone());
    let app = app_router(state, config.body_limit_bytes);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("database pool closed");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
