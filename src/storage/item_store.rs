// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! SQLite-backed item store
//!
//! Schema: `items (id INTEGER PRIMARY KEY, category TEXT, features BLOB)`
//! with an index on category for candidate lookups during outfit
//! generation. Feature vectors are L2-normalized before insert and stored
//! as little-endian f32 bytes.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use thiserror::Error;
use tracing::{debug, info};

/// Errors from the item store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("item {0} already exists")]
    Conflict(i64),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// A stored clothing item
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: i64,
    pub category: String,
    pub features: Vec<f32>,
}

#[derive(sqlx::FromRow)]
struct ItemRow {
    id: i64,
    category: String,
    features: Vec<u8>,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Item {
            id: row.id,
            category: row.category,
            features: decode_features(&row.features),
        }
    }
}

/// SQLite-backed store for clothing items.
///
/// Cheap to clone; all clones share the same connection pool. Writes are
/// serialized by SQLite, reads do not block each other.
#[derive(Clone)]
pub struct ItemStore {
    pool: SqlitePool,
}

impl ItemStore {
    /// Open (or create) the item database at `db_path` and ensure the
    /// schema exists.
    pub async fn new(db_path: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.init_schema().await?;
        info!("item store ready at {} ({} items)", db_path, store.count().await?);
        Ok(store)
    }

    /// Open an in-memory store. Used by tests; a single connection keeps
    /// every query on the same in-memory database.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;

        let store = Self { pool };
        store.init_schema().await?;
        Ok(store)
    }

    async fn init_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS items (
                id INTEGER PRIMARY KEY,
                category TEXT NOT NULL,
                features BLOB NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_items_category ON items(category)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Insert a new item and return its id.
    ///
    /// Client-supplied ids are honored verbatim; a collision is a
    /// [`StoreError::Conflict`]. Server-generated ids are millisecond
    /// timestamps, nudged forward on the rare collision.
    pub async fn create(
        &self,
        category: &str,
        features: &[f32],
        id: Option<i64>,
    ) -> Result<i64, StoreError> {
        let blob = encode_features(&normalize(features));

        if let Some(id) = id {
            self.insert(id, category, &blob)
                .await
                .map_err(|e| match e {
                    StoreError::Conflict(_) => StoreError::Conflict(id),
                    other => other,
                })?;
            debug!("item {} created (category: {})", id, category);
            return Ok(id);
        }

        let mut id = chrono::Utc::now().timestamp_millis();
        loop {
            match self.insert(id, category, &blob).await {
                Ok(()) => {
                    debug!("item {} created (category: {})", id, category);
                    return Ok(id);
                }
                Err(StoreError::Conflict(_)) => id += 1,
                Err(other) => return Err(other),
            }
        }
    }

    async fn insert(&self, id: i64, category: &str, blob: &[u8]) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO items (id, category, features) VALUES (?1, ?2, ?3)")
            .bind(id)
            .bind(category)
            .bind(blob)
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_unique_violation() => StoreError::Conflict(id),
                _ => StoreError::Database(e),
            })?;
        Ok(())
    }

    /// Delete an item by id. Returns `false` if no row existed.
    pub async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM items WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Fetch a single item by id.
    pub async fn get(&self, id: i64) -> Result<Option<Item>, StoreError> {
        let row: Option<ItemRow> =
            sqlx::query_as("SELECT id, category, features FROM items WHERE id = ?1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(Item::from))
    }

    /// List every stored item, ordered by id.
    pub async fn list(&self) -> Result<Vec<Item>, StoreError> {
        let rows: Vec<ItemRow> =
            sqlx::query_as("SELECT id, category, features FROM items ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().map(Item::from).collect())
    }

    /// List items in a category (case-insensitive), up to `limit` rows.
    pub async fn list_by_category(&self, category: &str, limit: i64) -> Result<Vec<Item>, StoreError> {
        let rows: Vec<ItemRow> = sqlx::query_as(
            "SELECT id, category, features FROM items
             WHERE lower(category) = lower(?1) ORDER BY id LIMIT ?2",
        )
        .bind(category)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Item::from).collect())
    }

    /// Number of stored items.
    pub async fn count(&self) -> Result<i64, StoreError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM items")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.0)
    }
}

/// L2-normalize a feature vector, matching the representation the
/// compatibility model was trained against.
fn normalize(features: &[f32]) -> Vec<f32> {
    let norm = features.iter().map(|f| f * f).sum::<f32>().sqrt();
    features.iter().map(|f| f / (norm + 1e-8)).collect()
}

fn encode_features(features: &[f32]) -> Vec<u8> {
    features.iter().flat_map(|f| f.to_le_bytes()).collect()
}

fn decode_features(blob: &[u8]) -> Vec<f32> {
    blob.chunks_exact(4)
        .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect()
}
