// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Outfit generation response types

use serde::{Deserialize, Serialize};

use crate::generator::Outfit;

/// A single item in a generated outfit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutfitItem {
    pub id: i64,
    pub category: String,
}

/// The generated outfit itself
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutfitPayload {
    /// Companion items in selection order; never contains the seed
    pub items: Vec<OutfitItem>,
    pub item_count: usize,
}

/// Response from POST /api/v1/outfit/generate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOutfitResponse {
    pub outfit: OutfitPayload,
    /// Wall-clock generation latency in milliseconds
    pub generation_time_ms: f64,
}

impl GenerateOutfitResponse {
    pub fn new(outfit: Outfit, generation_time_ms: f64) -> Self {
        let items: Vec<OutfitItem> = outfit
            .items
            .into_iter()
            .map(|item| OutfitItem {
                id: item.id,
                category: item.category,
            })
            .collect();
        let item_count = items.len();

        Self {
            outfit: OutfitPayload { items, item_count },
            generation_time_ms,
        }
    }
}
