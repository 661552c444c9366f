//! Shared helpers for router-level tests

#![allow(dead_code)]

use std::sync::atomic::{AtomicU32, Ordering};

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tower::ServiceExt;

use stockctl_server::{build_router, ServerConfig};

/// Router over a pool that never connects. Requests rejected before the
/// repository layer complete; anything reaching the database fails.
pub fn offline_router() -> Router {
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://stockctl@localhost/stockctl_offline")
        .expect("valid database url");
    build_router(pool, &ServerConfig::default())
}

/// Router over the database in `DATABASE_URL`, schema ensured.
pub async fn live_router() -> (Router, PgPool) {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let pool = stockctl_server::create_pool(&url)
        .await
        .expect("pool creation failed");
    stockctl_server::db::schema::ensure(&pool)
        .await
        .expect("schema bootstrap failed");

    (build_router(pool.clone(), &ServerConfig::default()), pool)
}

pub async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = router
        .clone()
        .oneshot(builder.body(body).expect("request"))
        .await
        .expect("router is infallible");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}

/// Unique suffix so repeated runs against one database don't collide on names.
pub fn unique(prefix: &str) -> String {
    static COUNTER: AtomicU32 = AtomicU32::new(0);

    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("clock after epoch")
        .subsec_nanos();
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{}-{nanos}-{n}", std::process::id())
}
