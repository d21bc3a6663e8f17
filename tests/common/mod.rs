#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use serde_json::Value;
use tower::ServiceExt;

use thermostat_api::common::AppState;
use thermostat_api::config::Config;
use thermostat_api::routes;

pub const MEMORY_DB: &str = "sqlite::memory:";

/// Fresh migrated in-memory database. A single pooled connection keeps
/// every query on the same in-memory instance.
pub async fn test_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new(MEMORY_DB);
    opts.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(opts).await.expect("connect to sqlite");
    Migrator::up(&db, None).await.expect("run migrations");
    db
}

pub async fn test_state_with(config: Config) -> AppState {
    AppState::new(test_db().await, config)
}

pub async fn test_state() -> AppState {
    test_state_with(Config::for_database(MEMORY_DB)).await
}

pub fn test_app(state: AppState) -> Router {
    routes::build_router(state)
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("request");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, body)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("build request");
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: &Router, uri: &str, body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .expect("build request");
    send(app, request).await
}

pub fn temperatures(page: &Value) -> Vec<f64> {
    page["items"]
        .as_array()
        .expect("items array")
        .iter()
        .map(|r| r["temperatureC"].as_f64().expect("temperatureC"))
        .collect()
}
