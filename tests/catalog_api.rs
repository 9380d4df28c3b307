//! Integration tests for topics, users, the endpoint document, health routes and the 404 fallback.

mod common;

use axum::body::Body;
use axum::http::{Method, StatusCode};
use common::{body_json, build_test_app, get, send};
use serde_json::Value;
use sqlx::PgPool;

#[sqlx::test(migrations = "./migrations")]
async fn topics_have_slug_and_description(pool: PgPool) {
    let app = build_test_app(pool).await;
    let response = get(app, "/api/topics").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let topics = json["topics"].as_array().expect("topics should be an array");
    assert_eq!(topics.len(), 3);
    for t in topics {
        assert!(t["slug"].is_string());
        assert!(t["description"].is_string());
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn users_are_listed(pool: PgPool) {
    let app = build_test_app(pool).await;
    let response = get(app, "/api/users").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let users = json["users"].as_array().expect("users should be an array");
    assert_eq!(users.len(), 4);
    for u in users {
        assert!(u["username"].is_string());
        assert!(u["name"].is_string());
        assert!(u["avatar_url"].is_string());
    }
    assert!(users.iter().any(|u| u["username"] == "lurker"));
}

#[sqlx::test(migrations = "./migrations")]
async fn api_serves_endpoint_document(pool: PgPool) {
    let app = build_test_app(pool).await;
    let response = get(app, "/api").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let expected: Value = serde_json::from_str(nc_news::state::ENDPOINTS_JSON).unwrap();
    assert_eq!(json["endpoints"], expected);
}

#[sqlx::test(migrations = "./migrations")]
async fn unknown_path_is_404_path_not_found(pool: PgPool) {
    let app = build_test_app(pool).await;
    let response = get(app, "/api/forklift").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["msg"], "path not found");
}

#[sqlx::test(migrations = "./migrations")]
async fn unsupported_method_on_known_path_is_404(pool: PgPool) {
    let app = build_test_app(pool).await;
    let response = send(app, Method::PUT, "/api/topics", Body::empty()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["msg"], "path not found");
}

#[sqlx::test(migrations = "./migrations")]
async fn health_and_ready(pool: PgPool) {
    let app = build_test_app(pool).await;
    let health = get(app.clone(), "/health").await;
    assert_eq!(health.status(), StatusCode::OK);
    assert_eq!(body_json(health).await["status"], "ok");

    let ready = get(app, "/ready").await;
    assert_eq!(ready.status(), StatusCode::OK);
    let json = body_json(ready).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["database"], "ok");
}

#[sqlx::test(migrations = "./migrations")]
async fn closed_pool_degrades_ready_and_hides_detail(pool: PgPool) {
    let app = build_test_app(pool.clone()).await;
    pool.close().await;

    let ready = get(app.clone(), "/ready").await;
    assert_eq!(ready.status(), StatusCode::SERVICE_UNAVAILABLE);
    let json = body_json(ready).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["database"], "unavailable");

    let topics = get(app, "/api/topics").await;
    assert_eq!(topics.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(topics).await, serde_json::json!({ "msg": "Internal Server Error" }));
}
