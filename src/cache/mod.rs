// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Compatibility score cache
//!
//! LRU cache keyed by the ordered item-id pair, so the score for (a, b)
//! answers lookups for (b, a) too. Scores are symmetric by construction
//! of the model input.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Mutex;

pub struct CompatibilityCache {
    entries: Mutex<LruCache<(i64, i64), f32>>,
}

impl CompatibilityCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).expect("capacity clamped to >= 1");
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    fn key(item1_id: i64, item2_id: i64) -> (i64, i64) {
        if item1_id < item2_id {
            (item1_id, item2_id)
        } else {
            (item2_id, item1_id)
        }
    }

    pub fn get(&self, item1_id: i64, item2_id: i64) -> Option<f32> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.get(&Self::key(item1_id, item2_id)).copied()
    }

    pub fn put(&self, item1_id: i64, item2_id: i64, score: f32) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.put(Self::key(item1_id, item2_id), score);
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
