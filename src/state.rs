//! Shared application state for all routes.

use sqlx::PgPool;

/// Injected once at startup; every handler borrows a connection from `pool` for the length of one request.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}
