//! Shared helpers for router-level tests.
//!
//! Tests drive the real router (middleware included) through
//! `tower::ServiceExt::oneshot`; state is shared across calls, so one test
//! can create a product and read it back through a second request.

#![allow(dead_code)]

use std::net::SocketAddr;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use http_body_util::BodyExt;
use serde_json::Value;

use catalog_api::app;
use catalog_api::config::{AppEnv, Config};
use catalog_api::state::AppState;

pub const TEST_SECRET: &str = "0123456789abcdef0123456789abcdef";

pub fn test_config() -> Config {
    Config {
        addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        app_env: AppEnv::Development,
        cors_allowed_origins: Vec::new(),
        jwt_secret: TEST_SECRET.to_string(),
        access_token_ttl_seconds: 3600,
        access_token_leeway_seconds: 0,
    }
}

pub fn test_app() -> (Router, AppState) {
    let config = test_config();
    let state = app::build_state(&config);
    let router = app::build_router(state.clone(), &config);
    (router, state)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Bodyless request, optionally carrying a bearer credential.
pub fn request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn json_request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: &Value,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap()
}

/// Machine-readable error kind from the common error body shape.
pub fn error_code(body: &Value) -> &str {
    body["error"]["code"].as_str().unwrap_or_default()
}
