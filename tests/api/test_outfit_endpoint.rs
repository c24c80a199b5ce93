// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Integration tests for POST /api/v1/outfit/generate

use axum::http::StatusCode;
use serde_json::json;

use super::helpers::{add_item, body_json, generate_outfit, test_router};

#[tokio::test]
async fn test_generate_missing_seed_is_404() {
    let router = test_router().await;
    let response = generate_outfit(&router, json!({"seed_item_id": 123})).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error_type"], "not_found");
}

#[tokio::test]
async fn test_generate_without_seed_field_is_400() {
    let router = test_router().await;
    let response = generate_outfit(&router, json!({"max_items": 3})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["details"]["field"], "seed_item_id");
}

#[tokio::test]
async fn test_generate_returns_companions() {
    let router = test_router().await;
    add_item(&router, "shirt", [200, 40, 40], Some("1")).await;
    add_item(&router, "pants", [40, 40, 200], Some("2")).await;
    add_item(&router, "shoes", [30, 30, 30], Some("3")).await;

    let response = generate_outfit(&router, json!({"seed_item_id": 1})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let items = json["outfit"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(json["outfit"]["item_count"], 2);
    assert!(json["generation_time_ms"].as_f64().unwrap() >= 0.0);

    let ids: Vec<i64> = items.iter().map(|i| i["id"].as_i64().unwrap()).collect();
    assert!(ids.contains(&2));
    assert!(ids.contains(&3));
}

#[tokio::test]
async fn test_seed_never_in_own_outfit() {
    let router = test_router().await;
    add_item(&router, "shirt", [200, 40, 40], Some("1")).await;
    // A second shirt that could otherwise be picked
    add_item(&router, "shirt", [210, 50, 50], Some("2")).await;
    add_item(&router, "pants", [40, 40, 200], Some("3")).await;

    let response = generate_outfit(&router, json!({"seed_item_id": 1})).await;
    let json = body_json(response).await;

    let ids: Vec<i64> = json["outfit"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_i64().unwrap())
        .collect();
    assert!(!ids.contains(&1));
}

#[tokio::test]
async fn test_max_items_bounds_result() {
    let router = test_router().await;
    add_item(&router, "shirt", [200, 40, 40], Some("1")).await;
    add_item(&router, "pants", [40, 40, 200], Some("2")).await;
    add_item(&router, "shoes", [30, 30, 30], Some("3")).await;

    let response = generate_outfit(&router, json!({"seed_item_id": 1, "max_items": 1})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["outfit"]["items"].as_array().unwrap().len() <= 1);
}

#[tokio::test]
async fn test_zero_max_items_yields_empty_outfit() {
    let router = test_router().await;
    add_item(&router, "shirt", [200, 40, 40], Some("1")).await;
    add_item(&router, "pants", [40, 40, 200], Some("2")).await;

    let response = generate_outfit(&router, json!({"seed_item_id": 1, "max_items": 0})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["outfit"]["item_count"], 0);
}

#[tokio::test]
async fn test_unknown_seed_category_yields_empty_outfit() {
    let router = test_router().await;
    add_item(&router, "cape", [5, 5, 5], Some("1")).await;

    let response = generate_outfit(&router, json!({"seed_item_id": 1})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["outfit"]["item_count"], 0);
}

#[tokio::test]
async fn test_new_item_joins_candidate_pool() {
    let router = test_router().await;
    add_item(&router, "shirt", [200, 40, 40], Some("1")).await;

    // No pants or shoes stored yet
    let response = generate_outfit(&router, json!({"seed_item_id": 1})).await;
    let json = body_json(response).await;
    assert_eq!(json["outfit"]["item_count"], 0);

    // Once a pants item exists it becomes a candidate
    add_item(&router, "pants", [40, 40, 200], Some("2")).await;
    let response = generate_outfit(&router, json!({"seed_item_id": 1})).await;
    let json = body_json(response).await;

    let ids: Vec<i64> = json["outfit"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![2]);
}

#[tokio::test]
async fn test_deleted_item_leaves_candidate_pool() {
    let router = test_router().await;
    add_item(&router, "shirt", [200, 40, 40], Some("1")).await;
    add_item(&router, "pants", [40, 40, 200], Some("2")).await;

    let response = generate_outfit(&router, json!({"seed_item_id": 1})).await;
    let json = body_json(response).await;
    assert_eq!(json["outfit"]["item_count"], 1);

    super::helpers::delete_item(&router, 2).await;

    let response = generate_outfit(&router, json!({"seed_item_id": 1})).await;
    let json = body_json(response).await;
    assert_eq!(json["outfit"]["item_count"], 0);
}
