//! Tracing subscriber setup for binaries.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_FILTER: &str = "inventory_api=info,tower_http=info";

/// Install the fmt subscriber. `RUST_LOG` wins over `DEFAULT_LOG_FILTER` when set.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
