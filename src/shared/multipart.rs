use axum::extract::Multipart;
use tracing::debug;

use crate::core::error::{AppError, Result};
use crate::shared::constants::{ALLOWED_IMAGE_TYPES, MAX_IMAGE_SIZE};

/// An image upload parsed out of a multipart form.
///
/// The form carries the image under `file` and the row version the caller
/// based the change on under `row_version`.
pub struct ImageUpload {
    pub data: Vec<u8>,
    pub content_type: String,
    pub row_version: i64,
}

/// Read and check an image upload form.
///
/// Size and content type are rejected here, before any storage traffic.
pub async fn read_image_upload(mut multipart: Multipart) -> Result<ImageUpload> {
    let mut data: Option<Vec<u8>> = None;
    let mut content_type: Option<String> = None;
    let mut row_version: Option<i64> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "file" => {
                let ct = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());

                let bytes = field.bytes().await.map_err(|e| {
                    debug!("Failed to read file bytes: {}", e);
                    AppError::BadRequest(format!("Failed to read file data: {}", e))
                })?;

                data = Some(bytes.to_vec());
                content_type = Some(ct);
            }
            "row_version" => {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read row_version field: {}", e))
                })?;
                let version = text.parse::<i64>().map_err(|_| {
                    AppError::BadRequest("row_version must be an integer".to_string())
                })?;
                row_version = Some(version);
            }
            _ => {
                debug!("Ignoring unknown field: {}", field_name);
            }
        }
    }

    let data = data.ok_or_else(|| AppError::BadRequest("Image file is required".to_string()))?;
    let content_type = content_type
        .ok_or_else(|| AppError::BadRequest("Image content type is required".to_string()))?;
    let row_version = row_version
        .ok_or_else(|| AppError::BadRequest("row_version field is required".to_string()))?;

    if data.len() > MAX_IMAGE_SIZE {
        return Err(AppError::BadRequest(format!(
            "Image too large. Maximum size is {} bytes ({} MB)",
            MAX_IMAGE_SIZE,
            MAX_IMAGE_SIZE / 1024 / 1024
        )));
    }

    if !ALLOWED_IMAGE_TYPES.contains(&content_type.as_str()) {
        return Err(AppError::BadRequest(format!(
            "Image type '{}' is not allowed. Allowed types: {}",
            content_type,
            ALLOWED_IMAGE_TYPES.join(", ")
        )));
    }

    Ok(ImageUpload {
        data,
        content_type,
        row_version,
    })
}
