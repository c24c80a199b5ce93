// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Outfit generation
//!
//! Template-driven generation: the seed item's category selects the
//! companion categories to fill, and for each one the candidate with the
//! best mean compatibility against the outfit so far is kept. Scores go
//! through the LRU cache before touching the model.

use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

use crate::cache::CompatibilityCache;
use crate::model::{CompatibilityModel, ModelError};
use crate::storage::{Item, ItemStore, StoreError};

/// Default companion count when the request does not set `max_items`
pub const DEFAULT_MAX_ITEMS: usize = 4;

/// Hard cap on `max_items`; larger requests are clamped
pub const MAX_ITEMS_CAP: usize = 10;

/// Candidates scored per companion category
const CANDIDATE_LIMIT: i64 = 100;

/// Errors from outfit generation
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("item {0} not found")]
    SeedNotFound(i64),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Model(#[from] ModelError),
}

/// A generated outfit: the companion items selected for a seed, in
/// selection order. Outfits are computed on demand, never persisted.
#[derive(Debug, Clone)]
pub struct Outfit {
    pub items: Vec<Item>,
}

/// Companion categories to fill for a given seed category.
///
/// Unknown categories have no template; the outfit is then just the seed.
pub fn template_for(category: &str) -> Option<&'static [&'static str]> {
    let template: &'static [&'static str] = match category {
        "blazer" => &["shirt", "pants", "shoes"],
        "blouse" => &["pants", "shoes"],
        "body" => &["shoes"],
        "dress" => &["shoes", "outwear"],
        "hat" => &["top", "pants", "shoes"],
        "hoodie" => &["pants", "shoes"],
        "longsleeve" => &["pants", "shoes"],
        "outwear" => &["shirt", "pants", "shoes"],
        "pants" => &["blouse", "shoes"],
        "polo" => &["pants", "shoes"],
        "shirt" => &["pants", "shoes"],
        "shoes" => &["shirt", "pants", "top"],
        "shorts" => &["polo", "shoes"],
        "skirt" => &["shirt", "top", "shoes"],
        "t-shirt" => &["shorts", "shoes"],
        "top" => &["skirt", "shoes"],
        "undershirt" => &["shirt", "pants", "shoes"],
        _ => return None,
    };
    Some(template)
}

pub struct OutfitGenerator {
    model: Arc<dyn CompatibilityModel>,
    store: ItemStore,
    cache: CompatibilityCache,
}

impl OutfitGenerator {
    pub fn new(model: Arc<dyn CompatibilityModel>, store: ItemStore, cache: CompatibilityCache) -> Self {
        Self { model, store, cache }
    }

    /// Generate companions for a seed item.
    ///
    /// The seed must exist; nothing is scored otherwise. At most
    /// `max_items` companions are returned and the seed is never among
    /// them.
    pub async fn generate(&self, seed_item_id: i64, max_items: usize) -> Result<Outfit, GeneratorError> {
        let seed = self
            .store
            .get(seed_item_id)
            .await?
            .ok_or(GeneratorError::SeedNotFound(seed_item_id))?;

        let seed_category = seed.category.to_lowercase();
        let Some(template) = template_for(&seed_category) else {
            warn!("no outfit template for category '{}'", seed.category);
            return Ok(Outfit { items: Vec::new() });
        };

        let mut outfit = vec![seed];
        let mut companions = Vec::new();

        for &category in template.iter().filter(|&&c| c != seed_category) {
            if companions.len() >= max_items {
                break;
            }
            if let Some(item) = self.best_match(&outfit, category).await? {
                debug!("selected item {} for category '{}'", item.id, category);
                outfit.push(item.clone());
                companions.push(item);
            }
        }

        Ok(Outfit { items: companions })
    }

    /// Best-scoring candidate in `category` against the current outfit,
    /// or `None` when the category is empty or nothing scores above zero.
    async fn best_match(&self, outfit: &[Item], category: &str) -> Result<Option<Item>, GeneratorError> {
        let candidates = self.store.list_by_category(category, CANDIDATE_LIMIT).await?;

        let mut best: Option<Item> = None;
        let mut best_score = 0f32;
        for candidate in candidates {
            if outfit.iter().any(|item| item.id == candidate.id) {
                continue;
            }
            let score = self.outfit_score(&candidate, outfit)?;
            if score > best_score {
                best_score = score;
                best = Some(candidate);
            }
        }
        Ok(best)
    }

    /// Mean compatibility of a candidate against every item currently in
    /// the outfit, cache-first.
    fn outfit_score(&self, candidate: &Item, outfit: &[Item]) -> Result<f32, GeneratorError> {
        let mut total = 0f32;
        for item in outfit {
            let score = match self.cache.get(candidate.id, item.id) {
                Some(score) => score,
                None => {
                    let score = self.model.predict(&item.features, &candidate.features)?;
                    self.cache.put(candidate.id, item.id, score);
                    score
                }
            };
            total += score;
        }
        if outfit.is_empty() {
            return Ok(0.0);
        }
        Ok(total / outfit.len() as f32)
    }
}
