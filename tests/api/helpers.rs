// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Shared helpers for API integration tests: a router over an in-memory
//! store, a cosine stand-in for the trained model, and multipart body
//! construction.

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use image::{Rgb, RgbImage};
use std::io::Cursor;
use std::sync::Arc;
use tower::ServiceExt;

use outfit_node::api::{build_router, AppState};
use outfit_node::cache::CompatibilityCache;
use outfit_node::features::ClothingFeatureExtractor;
use outfit_node::generator::OutfitGenerator;
use outfit_node::model::{CompatibilityModel, ModelError};
use outfit_node::storage::ItemStore;

pub const BOUNDARY: &str = "outfit-node-test-boundary";

/// Stand-in for the trained model: cosine similarity of the stored
/// (already normalized) vectors, mapped into [0, 1].
pub struct CosineModel;

impl CompatibilityModel for CosineModel {
    fn predict(&self, item1: &[f32], item2: &[f32]) -> Result<f32, ModelError> {
        let dot: f32 = item1.iter().zip(item2.iter()).map(|(a, b)| a * b).sum();
        Ok(((dot + 1.0) / 2.0).clamp(0.0, 1.0))
    }
}

/// Router over a fresh in-memory store and the cosine model.
pub async fn test_router() -> Router {
    let store = ItemStore::in_memory().await.expect("in-memory store");
    let generator = OutfitGenerator::new(
        Arc::new(CosineModel),
        store.clone(),
        CompatibilityCache::new(256),
    );
    build_router(AppState {
        store,
        extractor: Arc::new(ClothingFeatureExtractor::new()),
        generator: Arc::new(generator),
    })
}

/// A small solid-color PNG
pub fn png_bytes(color: [u8; 3]) -> Vec<u8> {
    let img = RgbImage::from_pixel(16, 16, Rgb(color));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageFormat::Png)
        .expect("encode png");
    buf.into_inner()
}

/// Build a multipart form body for POST /api/v1/items. Any part can be
/// omitted to exercise validation.
pub fn item_form(image: Option<&[u8]>, category: Option<&str>, id: Option<&str>) -> Vec<u8> {
    let mut body = Vec::new();
    if let Some(image) = image {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"image\"; \
                 filename=\"item.png\"\r\nContent-Type: image/png\r\n\r\n",
                BOUNDARY
            )
            .as_bytes(),
        );
        body.extend_from_slice(image);
        body.extend_from_slice(b"\r\n");
    }
    if let Some(category) = category {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"category\"\r\n\r\n{}\r\n",
                BOUNDARY, category
            )
            .as_bytes(),
        );
    }
    if let Some(id) = id {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"id\"\r\n\r\n{}\r\n",
                BOUNDARY, id
            )
            .as_bytes(),
        );
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

/// POST a multipart item-creation request.
pub async fn post_item(router: &Router, body: Vec<u8>) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/items")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .expect("build request");
    router.clone().oneshot(request).await.expect("send request")
}

/// Convenience: add a valid item with a solid-color image.
pub async fn add_item(
    router: &Router,
    category: &str,
    color: [u8; 3],
    id: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let response = post_item(router, item_form(Some(&png_bytes(color)), Some(category), id)).await;
    let status = response.status();
    (status, body_json(response).await)
}

/// DELETE /api/v1/items/{id}
pub async fn delete_item(router: &Router, id: i64) -> Response<Body> {
    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/v1/items/{}", id))
        .body(Body::empty())
        .expect("build request");
    router.clone().oneshot(request).await.expect("send request")
}

/// POST /api/v1/outfit/generate
pub async fn generate_outfit(router: &Router, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/outfit/generate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("build request");
    router.clone().oneshot(request).await.expect("send request")
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("parse json body")
}
