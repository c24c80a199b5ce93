// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Item deletion endpoint handler

use axum::extract::{Path, State};
use axum::Json;
use tracing::{info, warn};

use super::response::DeleteItemResponse;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;

/// DELETE /api/v1/items/{id} - Remove a clothing item
///
/// Repeated deletes of the same id fail with 404 after the first
/// success.
///
/// # Errors
/// - 404 Not Found: id absent from the store
/// - 500 Internal Server Error: storage failure
pub async fn delete_item_handler(
    State(state): State<AppState>,
    Path(item_id): Path<i64>,
) -> Result<Json<DeleteItemResponse>, ApiError> {
    let deleted = state.store.delete(item_id).await?;
    if !deleted {
        warn!("delete of unknown item {}", item_id);
        return Err(ApiError::NotFound(format!("item {} not found", item_id)));
    }

    info!("item {} deleted", item_id);
    Ok(Json(DeleteItemResponse::new(item_id)))
}
