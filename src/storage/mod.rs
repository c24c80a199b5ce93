// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Persistent item storage
//!
//! A single SQLite table keyed by item id, holding the category label and
//! the L2-normalized feature vector for each clothing item.

pub mod item_store;

pub use item_store::{Item, ItemStore, StoreError};
