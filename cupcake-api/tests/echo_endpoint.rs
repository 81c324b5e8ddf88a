use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Request, StatusCode},
};
use cupcake_api::{app, AppState};
use serde_json::Value;
use std::sync::atomic::Ordering;
use tower::ServiceExt;

const ORDER: &str = r#"{"type":2,"quantity":5,"extraFrosting":true,"addSprinkles":false,"name":"Ada","streetAddress":"1 Main St","city":"Town","zipcode":"00000"}"#;

fn post(body: &'static str, content_type: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("POST").uri("/api/cupcakes");
    if let Some(ct) = content_type {
        builder = builder.header(CONTENT_TYPE, ct);
    }
    builder.body(Body::from(body)).unwrap()
}

#[tokio::test]
async fn test_order_is_echoed_with_id() {
    let state = AppState::default();
    let response = app(state.clone())
        .oneshot(post(ORDER, Some("application/json")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body["quantity"], 5);
    assert_eq!(body["name"], "Ada");
    assert!(body["id"].is_string());
    assert!(body["createdAt"].is_string());
    assert_eq!(state.received.load(Ordering::Relaxed), 1);

    let echoed = cupcake_core::wire::deserialize(&bytes).unwrap();
    assert_eq!(echoed.flavor_name(), Some("Chocolate"));
}

#[tokio::test]
async fn test_any_object_is_echoed() {
    let response = app(AppState::default())
        .oneshot(post(r#"{"hello":"world"}"#, Some("application/json")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["hello"], "world");
}

#[tokio::test]
async fn test_missing_content_type_is_rejected() {
    let response = app(AppState::default())
        .oneshot(post(ORDER, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_non_object_body_is_rejected() {
    let response = app(AppState::default())
        .oneshot(post("[1,2,3]", Some("application/json")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_health() {
    let response = app(AppState::default())
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
