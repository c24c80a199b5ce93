// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Item creation endpoint handler

use axum::extract::{Multipart, State};
use axum::Json;
use tracing::{debug, info, warn};

use super::request::AddItemRequest;
use super::response::AddItemResponse;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;

/// POST /api/v1/items - Add a clothing item
///
/// Accepts a multipart form with an `image` file, a `category` text field
/// and an optional integer `id`. Features are extracted exactly once,
/// synchronously, before the item is persisted.
///
/// # Errors
/// - 400 Bad Request: missing image/category, malformed id
/// - 409 Conflict: client-supplied id already exists
/// - 500 Internal Server Error: feature extraction or storage failure
pub async fn add_item_handler(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AddItemResponse>, ApiError> {
    let request = AddItemRequest::from_multipart(multipart).await?;

    if let Err(e) = request.validate() {
        warn!("item creation validation failed: {}", e);
        return Err(e);
    }

    let image = request.image.as_deref().ok_or_else(|| ApiError::ValidationError {
        field: "image".to_string(),
        message: "image file is required".to_string(),
    })?;
    let category = request.category.as_deref().ok_or_else(|| ApiError::ValidationError {
        field: "category".to_string(),
        message: "category is required".to_string(),
    })?;

    debug!(
        "item creation request: category '{}', {} image bytes",
        category,
        image.len()
    );

    let features = state.extractor.extract(image, category).map_err(|e| {
        warn!("feature extraction failed: {}", e);
        ApiError::ExtractionError(e.to_string())
    })?;

    let id = state.store.create(category, &features, request.id).await?;

    info!("item {} added (category: {})", id, category);
    Ok(Json(AddItemResponse::new(id)))
}
