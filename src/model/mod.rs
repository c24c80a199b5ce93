// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Outfit compatibility model
//!
//! Wraps the exported trained model behind the [`CompatibilityModel`]
//! trait so the generator (and tests) never depend on ONNX Runtime
//! directly. Weights are loaded once at process start and are read-only
//! for the process lifetime.

use ndarray::Array2;
use ort::session::builder::GraphOptimizationLevel;
use ort::session::Session;
use ort::value::Value;
use std::path::Path;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing::info;

use crate::features::FEATURE_DIM;

/// Errors from model loading or inference
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model file not found: {0}")]
    NotFound(String),

    #[error("failed to load model: {0}")]
    LoadFailed(String),

    #[error("bad feature dimension: expected {expected}, got {got}")]
    Dimension { expected: usize, got: usize },

    #[error("inference failed: {0}")]
    Inference(String),
}

/// Pairwise compatibility scoring for two feature vectors.
///
/// Implementations return a score in `[0, 1]`; higher means the two items
/// look better together.
#[cfg_attr(test, mockall::automock)]
pub trait CompatibilityModel: Send + Sync {
    fn predict(&self, item1: &[f32], item2: &[f32]) -> Result<f32, ModelError>;
}

/// ONNX-based compatibility model.
///
/// The exported network takes two `[1, 200]` f32 inputs (`item1`,
/// `item2`) and produces a single sigmoid score.
///
/// # Thread Safety
/// The session is behind `Arc<Mutex<_>>` for thread-safe shared access;
/// clones share one session.
#[derive(Clone)]
pub struct OnnxCompatibilityModel {
    session: Arc<Mutex<Session>>,
    dimension: usize,
}

impl std::fmt::Debug for OnnxCompatibilityModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnnxCompatibilityModel")
            .field("dimension", &self.dimension)
            .finish_non_exhaustive()
    }
}

impl OnnxCompatibilityModel {
    /// Load the exported model from disk.
    ///
    /// A missing or unreadable model file is fatal at startup, never a
    /// per-request failure.
    pub fn load<P: AsRef<Path>>(model_path: P) -> Result<Self, ModelError> {
        let model_path = model_path.as_ref();
        if !model_path.exists() {
            return Err(ModelError::NotFound(model_path.display().to_string()));
        }

        let session = Session::builder()
            .map_err(|e| ModelError::LoadFailed(e.to_string()))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| ModelError::LoadFailed(e.to_string()))?
            .with_intra_threads(4)
            .map_err(|e| ModelError::LoadFailed(e.to_string()))?
            .commit_from_file(model_path)
            .map_err(|e| ModelError::LoadFailed(e.to_string()))?;

        info!("compatibility model loaded from {}", model_path.display());

        Ok(Self {
            session: Arc::new(Mutex::new(session)),
            dimension: FEATURE_DIM,
        })
    }
}

impl CompatibilityModel for OnnxCompatibilityModel {
    fn predict(&self, item1: &[f32], item2: &[f32]) -> Result<f32, ModelError> {
        for features in [item1, item2] {
            if features.len() != self.dimension {
                return Err(ModelError::Dimension {
                    expected: self.dimension,
                    got: features.len(),
                });
            }
        }

        let item1_array = Array2::from_shape_vec((1, self.dimension), item1.to_vec())
            .map_err(|e| ModelError::Inference(e.to_string()))?;
        let item2_array = Array2::from_shape_vec((1, self.dimension), item2.to_vec())
            .map_err(|e| ModelError::Inference(e.to_string()))?;

        let mut session = self
            .session
            .lock()
            .map_err(|e| ModelError::Inference(format!("session lock poisoned: {}", e)))?;

        let outputs = session
            .run(ort::inputs![
                "item1" => Value::from_array(item1_array)
                    .map_err(|e| ModelError::Inference(e.to_string()))?,
                "item2" => Value::from_array(item2_array)
                    .map_err(|e| ModelError::Inference(e.to_string()))?
            ])
            .map_err(|e| ModelError::Inference(e.to_string()))?;

        let scores = outputs[0]
            .try_extract_array::<f32>()
            .map_err(|e| ModelError::Inference(e.to_string()))?;

        let score = scores
            .iter()
            .next()
            .copied()
            .ok_or_else(|| ModelError::Inference("model returned no output".to_string()))?;

        Ok(score.clamp(0.0, 1.0))
    }
}
