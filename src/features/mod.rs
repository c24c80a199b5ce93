// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Clothing feature extraction
//!
//! Builds the 200-dimensional vector the compatibility model was trained
//! on: color histograms (105), texture descriptors (61) and category
//! features (34). Runs exactly once per item, at creation time.

use image::{DynamicImage, GrayImage};
use thiserror::Error;

/// Total feature vector length
pub const FEATURE_DIM: usize = 200;

/// Bins per color channel histogram
const COLOR_BINS: usize = 32;

/// LBP sampling points and radius
const LBP_POINTS: usize = 24;
const LBP_RADIUS: f32 = 3.0;

/// Side length images are resized to before texture extraction
const TEXTURE_SIZE: u32 = 224;

/// Gradient magnitude above which a pixel counts as an edge
const EDGE_THRESHOLD: f32 = 150.0;

/// Known clothing categories, in model input order
pub const CATEGORIES: [&str; 17] = [
    "blazer",
    "blouse",
    "body",
    "dress",
    "hat",
    "hoodie",
    "longsleeve",
    "outwear",
    "pants",
    "polo",
    "shirt",
    "shoes",
    "shorts",
    "skirt",
    "t-shirt",
    "top",
    "undershirt",
];

/// Index unknown categories fall back to ("top")
const FALLBACK_CATEGORY: usize = 15;

/// Pairwise category compatibility priors the model was trained with.
/// Row order matches [`CATEGORIES`].
#[rustfmt::skip]
const COMPATIBILITY_PRIOR: [[f32; 17]; 17] = [
    [0.5, 0.7, 0.3, 0.2, 0.6, 0.4, 0.6, 0.8, 0.9, 0.8, 0.8, 0.8, 0.7, 0.9, 0.7, 0.8, 0.3], // blazer
    [0.7, 0.5, 0.3, 0.2, 0.6, 0.3, 0.6, 0.6, 0.9, 0.7, 0.8, 0.8, 0.7, 0.9, 0.6, 0.8, 0.3], // blouse
    [0.3, 0.3, 0.5, 0.2, 0.4, 0.6, 0.7, 0.5, 0.8, 0.6, 0.7, 0.7, 0.8, 0.8, 0.8, 0.7, 0.6], // body
    [0.2, 0.2, 0.2, 0.5, 0.8, 0.3, 0.3, 0.7, 0.1, 0.2, 0.2, 0.9, 0.1, 0.1, 0.2, 0.2, 0.1], // dress
    [0.6, 0.6, 0.4, 0.8, 0.5, 0.6, 0.6, 0.7, 0.6, 0.6, 0.6, 0.3, 0.6, 0.6, 0.6, 0.6, 0.4], // hat
    [0.4, 0.3, 0.6, 0.3, 0.6, 0.5, 0.7, 0.6, 0.8, 0.7, 0.6, 0.8, 0.8, 0.6, 0.8, 0.7, 0.4], // hoodie
    [0.6, 0.6, 0.7, 0.3, 0.6, 0.7, 0.5, 0.6, 0.8, 0.7, 0.8, 0.8, 0.7, 0.8, 0.8, 0.8, 0.5], // longsleeve
    [0.8, 0.6, 0.5, 0.7, 0.7, 0.6, 0.6, 0.5, 0.7, 0.6, 0.7, 0.6, 0.6, 0.7, 0.6, 0.7, 0.4], // outwear
    [0.9, 0.9, 0.8, 0.1, 0.6, 0.8, 0.8, 0.7, 0.5, 0.8, 0.8, 0.8, 0.3, 0.3, 0.8, 0.8, 0.6], // pants
    [0.8, 0.7, 0.6, 0.2, 0.6, 0.7, 0.7, 0.6, 0.8, 0.5, 0.8, 0.8, 0.7, 0.8, 0.8, 0.8, 0.5], // polo
    [0.8, 0.8, 0.7, 0.2, 0.6, 0.6, 0.8, 0.7, 0.8, 0.8, 0.5, 0.8, 0.7, 0.8, 0.8, 0.8, 0.6], // shirt
    [0.8, 0.8, 0.7, 0.9, 0.3, 0.8, 0.8, 0.6, 0.8, 0.8, 0.8, 0.5, 0.8, 0.8, 0.8, 0.8, 0.6], // shoes
    [0.7, 0.7, 0.8, 0.1, 0.6, 0.8, 0.7, 0.6, 0.3, 0.7, 0.7, 0.8, 0.5, 0.3, 0.8, 0.8, 0.5], // shorts
    [0.9, 0.9, 0.8, 0.1, 0.6, 0.6, 0.8, 0.7, 0.3, 0.8, 0.8, 0.8, 0.3, 0.5, 0.8, 0.8, 0.6], // skirt
    [0.7, 0.6, 0.8, 0.2, 0.6, 0.8, 0.8, 0.6, 0.8, 0.8, 0.8, 0.8, 0.8, 0.8, 0.5, 0.8, 0.7], // t-shirt
    [0.8, 0.8, 0.7, 0.2, 0.6, 0.7, 0.8, 0.7, 0.8, 0.8, 0.8, 0.8, 0.8, 0.8, 0.8, 0.5, 0.6], // top
    [0.3, 0.3, 0.6, 0.1, 0.4, 0.4, 0.5, 0.4, 0.6, 0.5, 0.6, 0.6, 0.5, 0.6, 0.7, 0.6, 0.5], // undershirt
];

/// Errors from feature extraction
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("image data is empty")]
    EmptyImage,

    #[error("failed to decode image: {0}")]
    Decode(String),
}

/// Extracts the model's 200-dimensional input vector from an item image
/// and its category label.
#[derive(Debug, Clone, Default)]
pub struct ClothingFeatureExtractor;

impl ClothingFeatureExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract the full feature vector for one item.
    pub fn extract(&self, image_bytes: &[u8], category: &str) -> Result<Vec<f32>, ExtractionError> {
        if image_bytes.is_empty() {
            return Err(ExtractionError::EmptyImage);
        }

        let img = image::load_from_memory(image_bytes)
            .map_err(|e| ExtractionError::Decode(e.to_string()))?;

        let mut features = Vec::with_capacity(FEATURE_DIM);
        features.extend(color_features(&img));
        features.extend(texture_features(&img));
        features.extend(category_features(category));
        debug_assert_eq!(features.len(), FEATURE_DIM);
        Ok(features)
    }
}

/// Per-channel 32-bin histograms plus the top-3 dominant bin weights per
/// channel: 105 values.
fn color_features(img: &DynamicImage) -> Vec<f32> {
    let rgb = img.to_rgb8();
    let mut hists = [[0f32; COLOR_BINS]; 3];

    for pixel in rgb.pixels() {
        for (channel, &value) in pixel.0.iter().enumerate() {
            hists[channel][(value >> 3) as usize] += 1.0;
        }
    }

    let mut out = Vec::with_capacity(COLOR_BINS * 3 + 9);
    for hist in hists.iter_mut() {
        let sum: f32 = hist.iter().sum();
        for v in hist.iter_mut() {
            *v /= sum + 1e-8;
        }
        out.extend_from_slice(hist);
    }

    // Dominant colors: the three largest bin weights per channel,
    // smallest of the three first
    for hist in &hists {
        let mut indices: Vec<usize> = (0..COLOR_BINS).collect();
        indices.sort_by(|&a, &b| hist[a].partial_cmp(&hist[b]).unwrap_or(std::cmp::Ordering::Equal));
        for &idx in &indices[COLOR_BINS - 3..] {
            out.push(hist[idx]);
        }
    }

    out
}

/// Uniform LBP histogram, grayscale histogram and edge/intensity
/// statistics on a 224x224 resize: 61 values.
fn texture_features(img: &DynamicImage) -> Vec<f32> {
    let gray = image::imageops::resize(
        &img.to_luma8(),
        TEXTURE_SIZE,
        TEXTURE_SIZE,
        image::imageops::FilterType::Triangle,
    );

    let mut out = Vec::with_capacity(61);
    out.extend(uniform_lbp_histogram(&gray));

    let mut hist = [0f32; 32];
    let mut sum_intensity = 0f64;
    for p in gray.pixels() {
        hist[(p.0[0] >> 3) as usize] += 1.0;
        sum_intensity += p.0[0] as f64;
    }
    let pixel_count = (gray.width() * gray.height()) as f32;
    for v in hist.iter_mut() {
        *v /= pixel_count + 1e-8;
    }
    out.extend_from_slice(&hist);

    let mean = (sum_intensity / pixel_count as f64) as f32;
    let variance = gray
        .pixels()
        .map(|p| {
            let d = p.0[0] as f32 - mean;
            d * d
        })
        .sum::<f32>()
        / pixel_count;

    out.push(edge_density(&gray));
    out.push(mean / 255.0);
    out.push(variance.sqrt() / 255.0);
    out
}

/// One-hot category encoding plus the category's compatibility prior row:
/// 34 values. Unknown categories map to "top".
fn category_features(category: &str) -> Vec<f32> {
    let category_lower = category.to_lowercase();
    let idx = CATEGORIES
        .iter()
        .position(|&c| c == category_lower)
        .unwrap_or(FALLBACK_CATEGORY);

    let mut out = vec![0f32; CATEGORIES.len()];
    out[idx] = 1.0;
    out.extend_from_slice(&COMPATIBILITY_PRIOR[idx]);
    out
}

/// Rotation-invariant uniform LBP (P=24, R=3) histogram over interior
/// pixels, density-normalized: 26 bins.
fn uniform_lbp_histogram(gray: &GrayImage) -> Vec<f32> {
    let (width, height) = gray.dimensions();
    let mut hist = vec![0f32; LBP_POINTS + 2];
    let margin = LBP_RADIUS.ceil() as u32;
    if width <= 2 * margin || height <= 2 * margin {
        return hist;
    }

    let mut total = 0f32;
    let mut bits = [false; LBP_POINTS];
    for y in margin..height - margin {
        for x in margin..width - margin {
            let center = gray.get_pixel(x, y).0[0] as f32;
            for (p, bit) in bits.iter_mut().enumerate() {
                let theta = 2.0 * std::f32::consts::PI * p as f32 / LBP_POINTS as f32;
                let sx = x as f32 + LBP_RADIUS * theta.cos();
                let sy = y as f32 - LBP_RADIUS * theta.sin();
                *bit = bilinear_sample(gray, sx, sy) >= center;
            }

            let transitions = (0..LBP_POINTS)
                .filter(|&p| bits[p] != bits[(p + 1) % LBP_POINTS])
                .count();
            let bin = if transitions <= 2 {
                bits.iter().filter(|&&b| b).count()
            } else {
                LBP_POINTS + 1
            };
            hist[bin] += 1.0;
            total += 1.0;
        }
    }

    for v in hist.iter_mut() {
        *v /= total;
    }
    hist
}

/// Fraction of pixels whose Sobel gradient magnitude crosses the edge
/// threshold.
fn edge_density(gray: &GrayImage) -> f32 {
    let (width, height) = gray.dimensions();
    if width < 3 || height < 3 {
        return 0.0;
    }

    let px = |x: u32, y: u32| gray.get_pixel(x, y).0[0] as f32;
    let mut edges = 0u32;
    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let gx = px(x + 1, y - 1) + 2.0 * px(x + 1, y) + px(x + 1, y + 1)
                - px(x - 1, y - 1)
                - 2.0 * px(x - 1, y)
                - px(x - 1, y + 1);
            let gy = px(x - 1, y + 1) + 2.0 * px(x, y + 1) + px(x + 1, y + 1)
                - px(x - 1, y - 1)
                - 2.0 * px(x, y - 1)
                - px(x + 1, y - 1);
            if (gx * gx + gy * gy).sqrt() > EDGE_THRESHOLD {
                edges += 1;
            }
        }
    }
    edges as f32 / ((width - 2) * (height - 2)) as f32
}

fn bilinear_sample(gray: &GrayImage, x: f32, y: f32) -> f32 {
    let (width, height) = gray.dimensions();
    let x = x.clamp(0.0, (width - 1) as f32);
    let y = y.clamp(0.0, (height - 1) as f32);

    let x0 = x.floor() as u32;
    let y0 = y.floor() as u32;
    let x1 = (x0 + 1).min(width - 1);
    let y1 = (y0 + 1).min(height - 1);
    let fx = x - x0 as f32;
    let fy = y - y0 as f32;

    let p00 = gray.get_pixel(x0, y0).0[0] as f32;
    let p10 = gray.get_pixel(x1, y0).0[0] as f32;
    let p01 = gray.get_pixel(x0, y1).0[0] as f32;
    let p11 = gray.get_pixel(x1, y1).0[0] as f32;

    p00 * (1.0 - fx) * (1.0 - fy) + p10 * fx * (1.0 - fy) + p01 * (1.0 - fx) * fy + p11 * fx * fy
}
