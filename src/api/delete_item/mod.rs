// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Item deletion endpoint module
//!
//! Provides DELETE /api/v1/items/{id}.

pub mod handler;
pub mod response;

pub use handler::delete_item_handler;
pub use response::DeleteItemResponse;
