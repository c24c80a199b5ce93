// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP server wiring
//!
//! Builds the axum router over the shared [`AppState`] and serves it.
//! All request handling lives in the per-endpoint modules.

use axum::{
    extract::DefaultBodyLimit,
    response::Json,
    routing::{delete, get, post},
    Router,
};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use super::add_item::add_item_handler;
use super::delete_item::delete_item_handler;
use super::generate_outfit::generate_outfit_handler;
use crate::features::ClothingFeatureExtractor;
use crate::generator::OutfitGenerator;
use crate::storage::ItemStore;
use crate::version;

/// Shared per-request state: the item store, the feature extractor and
/// the outfit generator (which owns the model and the score cache). All
/// of it is initialized once at startup and injected here; teardown is
/// process exit.
#[derive(Clone)]
pub struct AppState {
    pub store: ItemStore,
    pub extractor: Arc<ClothingFeatureExtractor>,
    pub generator: Arc<OutfitGenerator>,
}

/// Build the application router. Extracted from [`start_server`] so
/// integration tests can drive it without binding a socket.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_handler))
        // Item management
        .route("/api/v1/items", post(add_item_handler))
        .route("/api/v1/items/:id", delete(delete_item_handler))
        // Outfit generation
        .route("/api/v1/outfit/generate", post(generate_outfit_handler))
        // Uploads are validated against a 10MB cap in the request layer;
        // the transport limit sits just above it
        .layer(DefaultBodyLimit::max(12 * 1024 * 1024))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

pub async fn start_server(state: AppState, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("API server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "message": "API is running",
        "version": version::VERSION_NUMBER,
    }))
}
