// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API input validation tests.
//!
//! These run against the real router with an offline database: every
//! request here must be rejected before any store access happens.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use tower::ServiceExt;

mod common;

/// Build a JSON POST request.
fn json_post(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Read a response body as JSON.
async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_create_user_missing_username() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(json_post("/api/users", serde_json::json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid username");
}

#[tokio::test]
async fn test_create_user_empty_username() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(json_post("/api/users", serde_json::json!({"username": ""})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid username");
}

#[tokio::test]
async fn test_create_user_whitespace_username() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(json_post(
            "/api/users",
            serde_json::json!({"username": "   "}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_add_exercise_missing_description() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(json_post(
            "/api/users/abc123/exercises",
            serde_json::json!({"duration": 45}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid request");
}

#[tokio::test]
async fn test_add_exercise_missing_duration() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(json_post(
            "/api/users/abc123/exercises",
            serde_json::json!({"description": "run"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid request");
}

#[tokio::test]
async fn test_add_exercise_non_numeric_duration() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(json_post(
            "/api/users/abc123/exercises",
            serde_json::json!({"description": "run", "duration": "forty-five"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid duration");
}

#[tokio::test]
async fn test_add_exercise_fractional_duration() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(json_post(
            "/api/users/abc123/exercises",
            serde_json::json!({"description": "run", "duration": 4.5}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid duration");
}

#[tokio::test]
async fn test_add_exercise_invalid_date() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(json_post(
            "/api/users/abc123/exercises",
            serde_json::json!({
                "description": "run",
                "duration": 45,
                "date": "yesterday-ish"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid date");
}

#[tokio::test]
async fn test_logs_invalid_from_date() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/users/abc123/logs?from=not-a-date")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid 'from' date");
}

#[tokio::test]
async fn test_logs_invalid_to_date() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/users/abc123/logs?to=2023-99-99")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid 'to' date");
}

#[tokio::test]
async fn test_health_check() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}
