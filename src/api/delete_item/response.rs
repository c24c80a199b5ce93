// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Item deletion response types

use serde::{Deserialize, Serialize};

/// Response from DELETE /api/v1/items/{id}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteItemResponse {
    pub message: String,
}

impl DeleteItemResponse {
    pub fn new(id: i64) -> Self {
        Self {
            message: format!("Item {} deleted successfully", id),
        }
    }
}
