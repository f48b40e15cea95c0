//! Load server settings from the environment (and `.env` when present).

use crate::config::types::*;
use crate::config::validate;
use crate::error::ConfigError;
use std::str::FromStr;

pub const HOST_VAR: &str = "HOST";
pub const PORT_VAR: &str = "PORT";
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
pub const MAX_CONNECTIONS_VAR: &str = "DB_MAX_CONNECTIONS";
pub const BODY_LIMIT_VAR: &str = "BODY_LIMIT_BYTES";

impl ServerConfig {
    /// Read `.env`, then the process environment. Unset variables fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup, then validate.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ServerConfig::default();
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let config = ServerConfig {
            host: get(HOST_VAR).unwrap_or(defaults.host),
            port: parse_var(PORT_VAR, get(PORT_VAR))?.unwrap_or(defaults.port),
            database_url: get(DATABASE_URL_VAR).unwrap_or(defaults.database_url),
            max_connections: parse_var(MAX_CONNECTIONS_VAR, get(MAX_CONNECTIONS_VAR))?
                .unwrap_or(defaults.max_connections),
            body_limit_bytes: parse_var(BODY_LIMIT_VAR, get(BODY_LIMIT_VAR))?.unwrap_or(defaults.body_limit_bytes),
        };
        validate(&config)?;
        Ok(config)
    }
}

fn parse_var<T: FromStr>(key: &'static str, value: Option<String>) -> Result<Option<T>, ConfigError> {
    match value {
        None => Ok(None),
        Some(v) => v
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value: v }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_addr(), "127.0.0.1:8001");
    }

    #[test]
    fn reads_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            (HOST_VAR, "0.0.0.0"),
            (PORT_VAR, "3000"),
            (DATABASE_URL_VAR, "sqlite::memory:"),
            (MAX_CONNECTIONS_VAR, "2"),
            (BODY_LIMIT_VAR, "4096"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.max_connections, 2);
        assert_eq!(config.body_limit_bytes, 4096);
    }

    #[test]
    fn unparsable_port_is_reported() {
        let err = ServerConfig::from_lookup(lookup(&[(PORT_VAR, "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: PORT_VAR, .. }));
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[(HOST_VAR, "  ")])).unwrap();
        assert_eq!(config.host, DEFAULT_HOST);
    }
}
