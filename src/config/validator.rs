//! Validate server settings before anything binds or connects.

use crate::config::ServerConfig;
use crate::error::ConfigError;

pub fn validate(config: &ServerConfig) -> Result<(), ConfigError> {
    if config.port == 0 {
        return Err(ConfigError::Validation("PORT must be non-zero".into()));
    }
    if config.max_connections == 0 {
        return Err(ConfigError::Validation("DB_MAX_CONNECTIONS must be at least 1".into()));
    }
    if config.body_limit_bytes == 0 {
        return Err(ConfigError::Validation("BODY_LIMIT_BYTES must be at least 1".into()));
    }
    if !config.database_url.starts_with("sqlite:") {
        return Err(ConfigError::Validation(format!(
            "DATABASE_URL must be a sqlite: URL, got '{}'",
            config.database_url
        )));
    }
    Ok(())
}
