//! Shared setup for store-backed tests.
//! Run with: TEST_DATABASE_URL=postgres://... cargo test -- --ignored

#![allow(dead_code)]

use axum::body::{to_bytes, Body, Bytes};
use axum::http::{header::CONTENT_TYPE, Method, Request, StatusCode};
use axum::Router;
use hero_api::{app, connect, ensure_tables, AppState, Settings};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

pub async fn test_pool() -> PgPool {
    let settings = Settings::from_lookup(|key| match key {
        "DATABASE_URL" => std::env::var(key)
            .ok()
            .or_else(|| std::env::var("TEST_DATABASE_URL").ok()),
        _ => std::env::var(key).ok(),
    })
    .expect("load settings");
    let url = settings
        .test_database_url
        .clone()
        .expect("TEST_DATABASE_URL must be set for store-backed tests");
    let pool = connect(&url, &settings).await.expect("connect to test database");
    ensure_tables(&pool).await.expect("bootstrap tables");
    pool
}

pub fn router(pool: &PgPool) -> Router {
    app(AppState::new(pool.clone()))
}

pub async fn send_raw(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Bytes) {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            req = req.header(CONTENT_TYPE, "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    let response = router.clone().oneshot(req.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes)
}

pub async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes) = send_raw(router, method, uri, body).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}
