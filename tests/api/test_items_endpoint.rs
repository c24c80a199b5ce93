// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Integration tests for /health and the item management endpoints

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use super::helpers::{
    add_item, body_json, delete_item, item_form, png_bytes, post_item, test_router,
};

#[tokio::test]
async fn test_health_endpoint() {
    let router = test_router().await;
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["message"], "API is running");
}

#[tokio::test]
async fn test_add_item_returns_message_and_id() {
    let router = test_router().await;
    let (status, json) = add_item(&router, "shirt", [200, 40, 40], None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Item added successfully");
    assert!(json["id"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn test_add_item_missing_category_is_400() {
    let router = test_router().await;
    let response = post_item(&router, item_form(Some(&png_bytes([1, 2, 3])), None, None)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error_type"], "validation_error");
}

#[tokio::test]
async fn test_add_item_missing_image_is_400() {
    let router = test_router().await;
    let response = post_item(&router, item_form(None, Some("shirt"), None)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error_type"], "validation_error");
    assert_eq!(json["details"]["field"], "image");
}

#[tokio::test]
async fn test_add_item_honors_client_id() {
    let router = test_router().await;
    let (status, json) = add_item(&router, "shirt", [10, 10, 10], Some("42")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], 42);
}

#[tokio::test]
async fn test_add_item_duplicate_id_is_409() {
    let router = test_router().await;
    let (status, _) = add_item(&router, "shirt", [10, 10, 10], Some("7")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, json) = add_item(&router, "pants", [20, 20, 20], Some("7")).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error_type"], "conflict");
}

#[tokio::test]
async fn test_add_item_non_integer_id_is_400() {
    let router = test_router().await;
    let response = post_item(
        &router,
        item_form(Some(&png_bytes([1, 2, 3])), Some("shirt"), Some("not-a-number")),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_add_item_undecodable_image_is_500() {
    let router = test_router().await;
    let response = post_item(
        &router,
        item_form(Some(b"this is not an image"), Some("shirt"), None),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error_type"], "extraction_error");
}

#[tokio::test]
async fn test_delete_item_lifecycle() {
    let router = test_router().await;
    let (status, json) = add_item(&router, "shirt", [50, 60, 70], Some("1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], 1);

    // First delete succeeds
    let response = delete_item(&router, 1).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Item 1 deleted successfully");

    // Second delete of the same id is 404
    let response = delete_item(&router, 1).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error_type"], "not_found");
}

#[tokio::test]
async fn test_delete_unknown_item_is_404() {
    let router = test_router().await;
    let response = delete_item(&router, 9999).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
