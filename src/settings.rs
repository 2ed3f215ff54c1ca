//! Process settings from environment variables (optionally seeded from a `.env` file).

use crate::error::ConfigError;
use sqlx::postgres::PgSslMode;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_POOL_RECYCLE_SECS: u64 = 300;

#[derive(Clone, Debug)]
pub struct Settings {
    pub database_url: String,
    /// Database used by the store-backed integration tests.
    pub test_database_url: Option<String>,
    /// Overrides any `sslmode` in the URL when set.
    pub ssl_mode: Option<PgSslMode>,
    pub max_connections: u32,
    /// Pooled connections older than this are closed and reopened.
    pub pool_recycle: Duration,
    pub bind_addr: SocketAddr,
}

impl Settings {
    /// Load `.env` if present, then read the environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let database_url = get("DATABASE_URL").ok_or(ConfigError::MissingVar("DATABASE_URL"))?;
        let ssl_mode = get("DATABASE_SSL_MODE")
            .map(|v| {
                PgSslMode::from_str(&v).map_err(|e| ConfigError::Invalid {
                    var: "DATABASE_SSL_MODE",
                    reason: e.to_string(),
                })
            })
            .transpose()?;
        let max_connections = parse_or(get("DATABASE_MAX_CONNECTIONS"), "DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                var: "DATABASE_MAX_CONNECTIONS",
                reason: "must be at least 1".into(),
            });
        }
        let recycle_secs = parse_or(get("DATABASE_POOL_RECYCLE_SECS"), "DATABASE_POOL_RECYCLE_SECS", DEFAULT_POOL_RECYCLE_SECS)?;
        let bind_addr = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr.parse().map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
            var: "BIND_ADDR",
            reason: e.to_string(),
        })?;

        Ok(Self {
            database_url,
            test_database_url: get("TEST_DATABASE_URL"),
            ssl_mode,
            max_connections,
            pool_recycle: Duration::from_secs(recycle_secs),
            bind_addr,
        })
    }
}

fn parse_or<T>(value: Option<String>, var: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        Some(v) => v.parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}
