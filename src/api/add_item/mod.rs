// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Item creation endpoint module
//!
//! Provides POST /api/v1/items for adding a clothing item from a
//! multipart image upload.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::add_item_handler;
pub use request::AddItemRequest;
pub use response::AddItemResponse;
