// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// Version information for the Outfit Node

/// Full version string with feature description
pub const VERSION: &str = "v0.1.0-outfit-api-2025-08-30";

/// Semantic version number
pub const VERSION_NUMBER: &str = "0.1.0";

/// Build date
pub const BUILD_DATE: &str = "2025-08-30";

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "item-store",
    "feature-extraction",
    "outfit-generation",
    "onnx-compatibility-model",
    "score-cache",
];

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("Outfit Node {} ({})", VERSION_NUMBER, BUILD_DATE)
}
