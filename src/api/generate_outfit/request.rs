// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Outfit generation request types and validation

use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::generator::{DEFAULT_MAX_ITEMS, MAX_ITEMS_CAP};

fn default_max_items() -> usize {
    DEFAULT_MAX_ITEMS
}

/// Request for POST /api/v1/outfit/generate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOutfitRequest {
    /// Id of the item the outfit is built around (required)
    #[serde(default)]
    pub seed_item_id: Option<i64>,

    /// Upper bound on returned items; defaults to 4, clamped to 10
    #[serde(default = "default_max_items")]
    pub max_items: usize,
}

impl GenerateOutfitRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.seed_item_id.is_none() {
            return Err(ApiError::ValidationError {
                field: "seed_item_id".to_string(),
                message: "seed_item_id is required".to_string(),
            });
        }
        Ok(())
    }

    /// Requested bound clamped to the configured cap.
    pub fn effective_max_items(&self) -> usize {
        self.max_items.min(MAX_ITEMS_CAP)
    }
}
