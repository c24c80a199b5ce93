// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Outfit generation endpoint module
//!
//! Provides POST /api/v1/outfit/generate.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::generate_outfit_handler;
pub use request::GenerateOutfitRequest;
pub use response::{GenerateOutfitResponse, OutfitItem, OutfitPayload};
