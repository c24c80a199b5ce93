// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod cache;
pub mod config;
pub mod features;
pub mod generator;
pub mod model;
pub mod storage;
pub mod version;

// Re-export main types
pub use cache::CompatibilityCache;
pub use config::NodeConfig;
pub use features::{ClothingFeatureExtractor, ExtractionError, FEATURE_DIM};
pub use generator::{GeneratorError, Outfit, OutfitGenerator};
pub use model::{CompatibilityModel, ModelError, OnnxCompatibilityModel};
pub use storage::{Item, ItemStore, StoreError};
