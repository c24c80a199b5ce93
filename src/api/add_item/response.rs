// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Item creation response types

use serde::{Deserialize, Serialize};

/// Response from POST /api/v1/items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddItemResponse {
    /// Human-readable confirmation
    pub message: String,
    /// Final item id (server-assigned when the request carried none)
    pub id: i64,
}

impl AddItemResponse {
    pub fn new(id: i64) -> Self {
        Self {
            message: "Item added successfully".to_string(),
            id,
        }
    }
}
