//! Integration tests for the Axum web adapter.
//!
//! These tests drive the real router against a temporary `SQLite` database
//! and verify the HTTP contract end to end.

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use todolist_axum::bootstrap::{CorsConfig, ServerConfig, bootstrap};
use todolist_axum::routes::create_router;

/// Build a router over a fresh database in its own temp directory.
/// The directory must stay alive for the duration of the test.
async fn test_app() -> (tempfile::TempDir, Router) {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = ServerConfig {
        port: 0, // Not used in tests
        database_path: dir.path().join("todolist.db"),
        cors: CorsConfig::AllowAll,
    };
    let ctx = bootstrap(&config).await.expect("bootstrap");
    (dir, create_router(ctx, &config.cors))
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Option<Value>, HeaderMap) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        None
    } else {
        serde_json::from_slice(&bytes).ok()
    };

    (status, value, headers)
}

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let (_dir, app) = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn listing_empty_store_returns_empty_array() {
    let (_dir, app) = test_app().await;

    let (status, body, _) = send(&app, "GET", "/api/todoitems", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.unwrap(), json!([]));
}

#[tokio::test]
async fn crud_lifecycle_round_trip() {
    let (_dir, app) = test_app().await;

    // Create
    let (status, body, headers) = send(
        &app,
        "POST",
        "/api/todoitems",
        Some(json!({"name": "Buy milk", "isComplete": false})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let created = body.unwrap();
    let id = created["id"].as_i64().expect("assigned id");
    assert_eq!(created["name"], "Buy milk");
    assert_eq!(created["isComplete"], false);
    assert_eq!(
        headers.get(header::LOCATION).unwrap(),
        &format!("/api/todoitems/{id}")
    );

    // Read back
    let uri = format!("/api/todoitems/{id}");
    let (status, body, _) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    let fetched = body.unwrap();
    assert_eq!(fetched["name"], "Buy milk");
    assert_eq!(fetched["isComplete"], false);

    // Replace
    let (status, body, _) = send(
        &app,
        "PUT",
        &uri,
        Some(json!({"name": "Buy milk", "isComplete": true})),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_none());

    let (status, body, _) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.unwrap()["isComplete"], true);

    // Delete
    let (status, body, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_none());

    let (status, _, _) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_with_blank_name_is_rejected() {
    let (_dir, app) = test_app().await;

    for name in ["", "   "] {
        let (status, _, _) = send(
            &app,
            "POST",
            "/api/todoitems",
            Some(json!({"name": name, "isComplete": false})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    // Nothing was persisted
    let (_, body, _) = send(&app, "GET", "/api/todoitems", None).await;
    assert_eq!(body.unwrap(), json!([]));
}

#[tokio::test]
async fn create_with_missing_name_is_rejected() {
    let (_dir, app) = test_app().await;

    let (status, _, _) = send(
        &app,
        "POST",
        "/api/todoitems",
        Some(json!({"isComplete": true})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_unknown_id_returns_not_found() {
    let (_dir, app) = test_app().await;

    let (status, _, _) = send(&app, "GET", "/api/todoitems/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_unknown_id_returns_not_found() {
    let (_dir, app) = test_app().await;

    let (status, _, _) = send(
        &app,
        "PUT",
        "/api/todoitems/999",
        Some(json!({"name": "Do", "isComplete": false})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_with_blank_name_is_rejected() {
    let (_dir, app) = test_app().await;

    let (_, body, _) = send(
        &app,
        "POST",
        "/api/todoitems",
        Some(json!({"name": "Do", "isComplete": false})),
    )
    .await;
    let id = body.unwrap()["id"].as_i64().unwrap();

    let (status, _, _) = send(
        &app,
        "PUT",
        &format!("/api/todoitems/{id}"),
        Some(json!({"name": " ", "isComplete": false})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Stored item is untouched
    let (_, body, _) = send(&app, "GET", &format!("/api/todoitems/{id}"), None).await;
    assert_eq!(body.unwrap()["name"], "Do");
}

#[tokio::test]
async fn delete_unknown_id_returns_not_found() {
    let (_dir, app) = test_app().await;

    let (status, _, _) = send(&app, "DELETE", "/api/todoitems/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn dto_shape_is_camel_case_without_internals() {
    let (_dir, app) = test_app().await;

    send(
        &app,
        "POST",
        "/api/todoitems",
        Some(json!({"name": "Shape", "isComplete": true})),
    )
    .await;

    let (_, body, _) = send(&app, "GET", "/api/todoitems", None).await;
    let items = body.unwrap();
    let item = &items.as_array().unwrap()[0];
    let keys: Vec<&String> = item.as_object().unwrap().keys().collect();

    assert!(item.get("isComplete").is_some());
    assert!(item.get("is_complete").is_none());
    assert!(item.get("secret").is_none());
    assert_eq!(keys.len(), 3);
}
