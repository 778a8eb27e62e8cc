//! Shared helpers for the HTTP-level integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use adserve_api::config::ServerConfig;
use adserve_api::router::build_app_router;
use adserve_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool.
///
/// Uses the same [`build_app_router`] as `main.rs`, so integration
/// tests exercise the production middleware stack (CORS, request ID,
/// timeout, tracing, panic recovery).
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::PUT)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Seed helpers (drive the public API, not the repositories)
// ---------------------------------------------------------------------------

/// Upsert one client via the bulk endpoint, returning its id.
pub async fn seed_client(pool: &PgPool, login: &str, age: i32, gender: &str, location: &str) -> String {
    let id = uuid::Uuid::new_v4().to_string();
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/clients/bulk",
        serde_json::json!([{
            "client_id": id,
            "login": login,
            "age": age,
            "location": location,
            "gender": gender,
        }]),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    id
}

/// Upsert one advertiser via the bulk endpoint, returning its id.
pub async fn seed_advertiser(pool: &PgPool, name: &str) -> String {
    let id = uuid::Uuid::new_v4().to_string();
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/advertisers/bulk",
        serde_json::json!([{ "advertiser_id": id, "name": name }]),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    id
}

/// A plausible campaign payload active on days `start..=end`.
pub fn campaign_payload(start: i32, end: i32) -> serde_json::Value {
    serde_json::json!({
        "impressions_limit": 100,
        "clicks_limit": 50,
        "cost_per_impression": 0.01,
        "cost_per_click": 0.1,
        "ad_title": "Spring sale",
        "ad_text": "Half off everything",
        "start_date": start,
        "end_date": end,
    })
}

/// Create a campaign via the API, returning its id.
pub async fn seed_campaign(
    pool: &PgPool,
    advertiser_id: &str,
    payload: serde_json::Value,
) -> String {
    let response = post_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/advertisers/{advertiser_id}/campaigns"),
        payload,
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    let json = body_json(response).await;
    json["campaign_id"].as_str().unwrap().to_string()
}

/// Set the simulated day via the API.
pub async fn set_day(pool: &PgPool, day: i32) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/time/advance",
        serde_json::json!({ "current_date": day }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);
}
