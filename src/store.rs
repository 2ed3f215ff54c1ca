//! Connection pool setup and idempotent table bootstrap for `team` and `hero`.

use crate::error::{AppError, ConfigError};
use crate::settings::Settings;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use std::str::FromStr;

fn connect_options(url: &str, settings: &Settings) -> Result<PgConnectOptions, AppError> {
    let opts = PgConnectOptions::from_str(url).map_err(|e| ConfigError::Invalid {
        var: "DATABASE_URL",
        reason: e.to_string(),
    })?;
    Ok(match settings.ssl_mode {
        Some(mode) => opts.ssl_mode(mode),
        None => opts,
    })
}

fn pool_options(settings: &Settings) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .max_lifetime(settings.pool_recycle)
}

/// Open the shared pool for `url`, failing fast if the database is unreachable.
pub async fn connect(url: &str, settings: &Settings) -> Result<PgPool, AppError> {
    let opts = connect_options(url, settings)?;
    let pool = pool_options(settings).connect_with(opts).await?;
    Ok(pool)
}

/// Build the pool without opening a connection; the first query connects.
pub fn connect_lazy(url: &str, settings: &Settings) -> Result<PgPool, AppError> {
    let opts = connect_options(url, settings)?;
    Ok(pool_options(settings).connect_lazy_with(opts))
}

const DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS team (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        headquarters TEXT NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS ix_team_name ON team (name)",
    r#"
    CREATE TABLE IF NOT EXISTS hero (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        secret_name TEXT NOT NULL,
        age INTEGER,
        team_id INTEGER REFERENCES team (id) ON DELETE SET NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS ix_hero_name ON hero (name)",
    "CREATE INDEX IF NOT EXISTS ix_hero_age ON hero (age)",
    "CREATE INDEX IF NOT EXISTS ix_hero_team_id ON hero (team_id)",
];

/// Create `team` and `hero` with their indexes if they do not exist yet.
pub async fn ensure_tables(pool: &PgPool) -> Result<(), AppError> {
    tracing::info!("ensuring tables");
    for ddl in DDL {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}
