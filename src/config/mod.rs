// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Node configuration loaded from environment variables

use std::env;
use std::path::PathBuf;

/// Default capacity of the compatibility score cache
const DEFAULT_CACHE_CAPACITY: usize = 10_000;

/// Runtime configuration for the outfit node.
///
/// Every field has a default so the node starts with no environment set;
/// a `.env` file is honored via dotenv before this is read.
#[derive(Debug, Clone)]
pub struct NodeConfig {
    /// Port the HTTP API binds to (`API_PORT`)
    pub api_port: u16,
    /// Path of the SQLite item database (`DB_PATH`)
    pub db_path: String,
    /// Path of the exported compatibility model (`MODEL_PATH`)
    pub model_path: PathBuf,
    /// Capacity of the in-memory compatibility score cache (`COMPAT_CACHE_CAPACITY`)
    pub cache_capacity: usize,
}

impl NodeConfig {
    /// Build a configuration from environment variables, falling back to
    /// defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        let api_port = env::var("API_PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(8080);

        let db_path = env::var("DB_PATH").unwrap_or_else(|_| "items.db".to_string());

        let model_path = env::var("MODEL_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("models/outfit_compatibility.onnx"));

        let cache_capacity = env::var("COMPAT_CACHE_CAPACITY")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|&c| c > 0)
            .unwrap_or(DEFAULT_CACHE_CAPACITY);

        Self {
            api_port,
            db_path,
            model_path,
            cache_capacity,
        }
    }
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            api_port: 8080,
            db_path: "items.db".to_string(),
            model_path: PathBuf::from("models/outfit_compatibility.onnx"),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}
