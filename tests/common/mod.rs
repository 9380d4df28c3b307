#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use nc_news::{build_app, seed, AppState, SeedData, ServerConfig};
use serde_json::Value;
use sqlx::PgPool;
use std::path::Path;
use tower::ServiceExt;

/// Seed the fixture data into `pool` and build the same router the server binary uses.
pub async fn build_test_app(pool: PgPool) -> Router {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/test");
    let data = SeedData::from_dir(dir).await.expect("test data should load");
    seed(&pool, &data).await.expect("seeding should succeed");
    let state = AppState::new(pool).expect("endpoint document should parse");
    build_app(state, &ServerConfig::default())
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, Body::empty()).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, Body::empty()).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    send_json(app, Method::POST, uri, body).await
}

pub async fn patch_json(app: Router, uri: &str, body: Value) -> Response {
    send_json(app, Method::PATCH, uri, body).await
}

pub async fn send_json(app: Router, method: Method, uri: &str, body: Value) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn send(app: Router, method: Method, uri: &str, body: Body) -> Response {
    let request = Request::builder().method(method).uri(uri).body(body).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

/// Timestamps as returned in bodies.
pub fn timestamp(v: &Value) -> chrono::DateTime<chrono::FixedOffset> {
    chrono::DateTime::parse_from_rfc3339(v.as_str().expect("timestamp string")).expect("rfc3339 timestamp")
}
