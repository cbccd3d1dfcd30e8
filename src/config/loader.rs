//! Read configuration from environment variables.

use super::types::{AppConfig, DbConfig, ServerConfig};
use crate::error::ConfigError;
use std::str::FromStr;

/// Load from the process environment. Call `dotenvy::dotenv()` first to pick up a `.env` file.
pub fn load_from_env() -> Result<AppConfig, ConfigError> {
    load_with(|key| std::env::var(key).ok())
}

/// Load through `lookup`, which returns the value for a variable name if set.
/// Unset and empty variables fall back to defaults.
pub fn load_with<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
    let db_defaults = DbConfig::default();
    let server_defaults = ServerConfig::default();

    let db = DbConfig {
        host: get("DB_HOST").unwrap_or(db_defaults.host),
        name: get("DB_NAME").unwrap_or(db_defaults.name),
        user: get("DB_USER").unwrap_or(db_defaults.user),
        password: lookup("DB_PASSWORD").unwrap_or(db_defaults.password),
        port: parse(&get, "DB_PORT", db_defaults.port)?,
        max_connections: parse(&get, "DB_MAX_CONNECTIONS", db_defaults.max_connections)?,
        url: get("DATABASE_URL"),
    };
    let server = ServerConfig {
        host: get("HOST").unwrap_or(server_defaults.host),
        port: parse(&get, "PORT", server_defaults.port)?,
        request_timeout_secs: parse(&get, "REQUEST_TIMEOUT_SECS", server_defaults.request_timeout_secs)?,
    };
    Ok(AppConfig { db, server })
}

fn parse<T, G>(get: &G, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
        None => Ok(default),
    }
}
