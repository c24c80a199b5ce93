// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Item creation request parsing and validation

use axum::extract::Multipart;

use crate::api::errors::ApiError;

/// Maximum accepted image upload (10MB)
const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024;

/// Parsed multipart form for POST /api/v1/items
#[derive(Debug, Clone, Default)]
pub struct AddItemRequest {
    /// Raw image bytes from the `image` file part
    pub image: Option<Vec<u8>>,

    /// Category label from the `category` text part
    pub category: Option<String>,

    /// Optional client-supplied id from the `id` text part
    pub id: Option<i64>,
}

impl AddItemRequest {
    /// Read the multipart form. Unknown parts are ignored; a malformed
    /// `id` is rejected here because it can never validate later.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut request = AddItemRequest::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::InvalidRequest(format!("malformed multipart body: {}", e)))?
        {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "image" => {
                    let bytes = field.bytes().await.map_err(|e| {
                        ApiError::InvalidRequest(format!("failed to read image part: {}", e))
                    })?;
                    request.image = Some(bytes.to_vec());
                }
                "category" => {
                    let text = field.text().await.map_err(|e| {
                        ApiError::InvalidRequest(format!("failed to read category part: {}", e))
                    })?;
                    request.category = Some(text);
                }
                "id" => {
                    let text = field.text().await.map_err(|e| {
                        ApiError::InvalidRequest(format!("failed to read id part: {}", e))
                    })?;
                    let id = text.trim().parse::<i64>().map_err(|_| {
                        ApiError::ValidationError {
                            field: "id".to_string(),
                            message: format!("id must be an integer, got '{}'", text),
                        }
                    })?;
                    request.id = Some(id);
                }
                _ => {}
            }
        }

        Ok(request)
    }

    /// Validate required fields before any side effect occurs.
    pub fn validate(&self) -> Result<(), ApiError> {
        match &self.image {
            None => {
                return Err(ApiError::ValidationError {
                    field: "image".to_string(),
                    message: "image file is required".to_string(),
                })
            }
            Some(bytes) if bytes.is_empty() => {
                return Err(ApiError::ValidationError {
                    field: "image".to_string(),
                    message: "image file is empty".to_string(),
                })
            }
            Some(bytes) if bytes.len() > MAX_IMAGE_SIZE => {
                return Err(ApiError::ValidationError {
                    field: "image".to_string(),
                    message: format!("image exceeds maximum size of {} bytes", MAX_IMAGE_SIZE),
                })
            }
            Some(_) => {}
        }

        match &self.category {
            None => Err(ApiError::ValidationError {
                field: "category".to_string(),
                message: "category is required".to_string(),
            }),
            Some(category) if category.trim().is_empty() => Err(ApiError::ValidationError {
                field: "category".to_string(),
                message: "category must not be empty".to_string(),
            }),
            Some(_) => Ok(()),
        }
    }
}
