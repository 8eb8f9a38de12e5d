#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use carcatalog_api::app::build_app;
use carcatalog_api::config::ServerConfig;
use carcatalog_api::state::AppState;

pub const TEST_ORIGIN: &str = "http://localhost:3000";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![TEST_ORIGIN.to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 5,
        seed_catalog: false,
    }
}

/// Build the full application router, middleware included, over `pool`.
pub fn build_test_app(pool: PgPool) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(test_config()),
    };
    build_app(state).unwrap()
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create a brand through the API and return its id.
pub async fn create_brand(pool: &PgPool, name: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/marcas",
        serde_json::json!({ "nomeMarca": name }),
    )
    .await;
    assert_eq!(response.status(), 201, "creating brand {name}");
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create a model through the API and return its id.
pub async fn create_model(pool: &PgPool, brand_id: i64, name: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/modelos",
        serde_json::json!({ "marcaId": brand_id, "nome": name, "valorFipe": 100000.0 }),
    )
    .await;
    assert_eq!(response.status(), 201, "creating model {name}");
    body_json(response).await["id"].as_i64().unwrap()
}

/// A valid car payload referencing `model_id`.
pub fn car_payload(model_id: i64) -> serde_json::Value {
    serde_json::json!({
        "modeloId": model_id,
        "ano": 2020,
        "combustivel": "FLEX",
        "numPortas": 4,
        "cor": "PRETO",
        "valor": 120000.0
    })
}

/// Create a car through the API and return its id.
pub async fn create_car(pool: &PgPool, model_id: i64) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/carros",
        car_payload(model_id),
    )
    .await;
    assert_eq!(response.status(), 201, "creating car for model {model_id}");
    body_json(response).await["id"].as_i64().unwrap()
}
