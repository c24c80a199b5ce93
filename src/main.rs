// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{Context, Result};
use outfit_node::{
    api::{start_server, AppState},
    cache::CompatibilityCache,
    config::NodeConfig,
    features::ClothingFeatureExtractor,
    generator::OutfitGenerator,
    model::OnnxCompatibilityModel,
    storage::ItemStore,
    version,
};
use std::{env, sync::Arc};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    info!("starting {}", version::get_version_string());

    let config = NodeConfig::from_env();

    // Load the trained compatibility model - fatal at startup, never
    // retried per request
    let model = OnnxCompatibilityModel::load(&config.model_path).with_context(|| {
        format!(
            "failed to load compatibility model from {}",
            config.model_path.display()
        )
    })?;

    let store = ItemStore::new(&config.db_path)
        .await
        .with_context(|| format!("failed to open item database at {}", config.db_path))?;

    let generator = OutfitGenerator::new(
        Arc::new(model),
        store.clone(),
        CompatibilityCache::new(config.cache_capacity),
    );

    let state = AppState {
        store,
        extractor: Arc::new(ClothingFeatureExtractor::new()),
        generator: Arc::new(generator),
    };

    start_server(state, config.api_port)
        .await
        .map_err(|e| anyhow::anyhow!("API server failed: {}", e))?;

    Ok(())
}
