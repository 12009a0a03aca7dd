//! Integration tests for the cross-origin policy on the full router
mod common;

use crate::common::create_test_app_state;

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use tower::ServiceExt;

use projects_config::CorsConfig;
use projects_server::{build_router, cors::build_cors_layer};

fn production_cors() -> tower_http::cors::CorsLayer {
    let config = CorsConfig {
        allowed_origins: vec!["http://localhost:5173".to_string()],
        allow_any_origin: false,
    };
    build_cors_layer(&config, true)
}

fn request_with_origin(origin: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri("/projects")
        .header(header::ORIGIN, origin)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_allow_listed_origin_is_echoed() {
    let state = create_test_app_state().await;
    let app = build_router(state, production_cors());

    let response = app
        .oneshot(request_with_origin("http://localhost:5173"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:5173")
    );
}

#[tokio::test]
async fn test_unknown_origin_is_not_acknowledged() {
    let state = create_test_app_state().await;
    let app = build_router(state, production_cors());

    let response = app
        .oneshot(request_with_origin("https://evil.example.com"))
        .await
        .unwrap();

    // The request itself still succeeds; the browser enforces the policy
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}

#[tokio::test]
async fn test_trusted_deploy_subdomain_is_acknowledged() {
    let state = create_test_app_state().await;
    let app = build_router(state, production_cors());

    let response = app
        .oneshot(request_with_origin("https://my-app.vercel.app"))
        .await
        .unwrap();

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("https://my-app.vercel.app")
    );
}

#[tokio::test]
async fn test_non_production_accepts_any_origin() {
    let state = create_test_app_state().await;
    let config = CorsConfig::default();
    let app = build_router(state, build_cors_layer(&config, false));

    let response = app
        .oneshot(request_with_origin("https://anything.example.org"))
        .await
        .unwrap();

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}
