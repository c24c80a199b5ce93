// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Outfit generation endpoint handler

use axum::extract::State;
use axum::Json;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::request::GenerateOutfitRequest;
use super::response::GenerateOutfitResponse;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;

/// POST /api/v1/outfit/generate - Generate an outfit for a seed item
///
/// # Request
/// - `seed_item_id`: id of an existing item (required)
/// - `max_items`: bound on returned items - defaults to 4, capped at 10
///
/// # Response
/// - `outfit.items`: companion items, seed excluded
/// - `outfit.item_count`: number of companions
/// - `generation_time_ms`: wall-clock latency
///
/// # Errors
/// - 400 Bad Request: missing seed_item_id
/// - 404 Not Found: seed item absent (nothing is scored in that case)
/// - 500 Internal Server Error: model or storage failure
pub async fn generate_outfit_handler(
    State(state): State<AppState>,
    Json(request): Json<GenerateOutfitRequest>,
) -> Result<Json<GenerateOutfitResponse>, ApiError> {
    if let Err(e) = request.validate() {
        warn!("outfit generation validation failed: {}", e);
        return Err(e);
    }

    let seed_item_id = request.seed_item_id.ok_or_else(|| ApiError::ValidationError {
        field: "seed_item_id".to_string(),
        message: "seed_item_id is required".to_string(),
    })?;
    let max_items = request.effective_max_items();

    debug!(
        "outfit generation request: seed {}, max_items {}",
        seed_item_id, max_items
    );

    let start = Instant::now();
    let outfit = state.generator.generate(seed_item_id, max_items).await?;
    let generation_time_ms = start.elapsed().as_secs_f64() * 1000.0;

    info!(
        "outfit generated for seed {}: {} items in {:.2}ms",
        seed_item_id,
        outfit.items.len(),
        generation_time_ms
    );

    Ok(Json(GenerateOutfitResponse::new(outfit, generation_time_ms)))
}
