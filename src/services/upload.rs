//! Upload proxy for issue photos.
//!
//! `POST /api/upload-to-r2` with a multipart body carrying `file` (binary)
//! and `filename` (string with a logical folder prefix, e.g.
//! `issue-images/<uuid>_photo_<n>.<ext>`). Success returns the object's
//! public URL; the resulting string is what issue reports store as
//! `image_url`.

use std::sync::Arc;

use actix_multipart::Multipart;
use actix_web::{HttpResponse, post, web};
use futures_util::StreamExt;
use serde::Serialize;
use tokio::sync::Semaphore;
use tracing::info;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};
use crate::services::Storage;

/// Upload response.
#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    /// Public URL of the uploaded object.
    pub url: String,
}

/// Configure upload routes.
pub fn configure_upload_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(upload_to_r2);
}

/// Validate a client-supplied object key.
///
/// Keys carry a logical folder prefix but must stay inside the bucket.
fn validate_key(filename: &str) -> AppResult<()> {
    if filename.is_empty() {
        return Err(AppError::InvalidInput("Missing filename".to_string()));
    }
    if filename.contains("..") || filename.starts_with('/') || filename.contains('\\') {
        return Err(AppError::InvalidInput("Invalid filename".to_string()));
    }
    Ok(())
}

/// Upload one file to object storage.
#[utoipa::path(
    post,
    path = "/api/upload-to-r2",
    tag = "Uploads",
    responses(
        (status = 200, description = "File uploaded", body = UploadResponse),
        (status = 400, description = "Invalid upload", body = crate::error::ErrorResponse),
        (status = 500, description = "Storage failure", body = crate::error::ErrorResponse)
    )
)]
#[post("/api/upload-to-r2")]
pub async fn upload_to_r2(
    mut payload: Multipart,
    storage: web::Data<Storage>,
    max_upload_size: web::Data<usize>,
    semaphore: web::Data<Arc<Semaphore>>,
) -> AppResult<HttpResponse> {
    // Bound concurrent uploads so peak memory stays at
    // max_concurrent_uploads x max_upload_size.
    let _permit = semaphore
        .acquire()
        .await
        .map_err(|_| AppError::Storage("Upload queue closed".to_string()))?;

    let mut filename: Option<String> = None;
    let mut file_bytes: Option<Vec<u8>> = None;

    while let Some(item) = payload.next().await {
        let mut field =
            item.map_err(|e| AppError::InvalidInput(format!("Multipart error: {}", e)))?;

        let field_name = field
            .content_disposition()
            .and_then(|cd| cd.get_name())
            .map(str::to_string);

        match field_name.as_deref() {
            Some("filename") => {
                let mut data = Vec::new();
                while let Some(chunk) = field.next().await {
                    let chunk =
                        chunk.map_err(|e| AppError::InvalidInput(format!("Read error: {}", e)))?;
                    data.extend_from_slice(&chunk);
                }
                let value = String::from_utf8(data)
                    .map_err(|_| AppError::InvalidInput("Filename is not UTF-8".to_string()))?;
                let value = value.trim().to_string();
                if !value.is_empty() {
                    filename = Some(value);
                }
            }
            Some("file") => {
                let mut data = Vec::new();
                while let Some(chunk) = field.next().await {
                    let chunk =
                        chunk.map_err(|e| AppError::InvalidInput(format!("Read error: {}", e)))?;
                    if data.len() + chunk.len() > *max_upload_size.get_ref() {
                        return Err(AppError::InvalidInput(format!(
                            "File exceeds maximum upload size of {} bytes",
                            max_upload_size.get_ref()
                        )));
                    }
                    data.extend_from_slice(&chunk);
                }
                file_bytes = Some(data);
            }
            _ => {
                // Unknown fields are drained and ignored
                while let Some(chunk) = field.next().await {
                    chunk.map_err(|e| AppError::InvalidInput(format!("Read error: {}", e)))?;
                }
            }
        }
    }

    let key = filename.ok_or_else(|| AppError::InvalidInput("Missing filename".to_string()))?;
    validate_key(&key)?;

    let data =
        file_bytes.ok_or_else(|| AppError::InvalidInput("Missing file field".to_string()))?;
    if data.is_empty() {
        return Err(AppError::InvalidInput("Empty file".to_string()));
    }

    let extension = key.rsplit('.').next().unwrap_or_default();
    let content_type = Storage::content_type_for_extension(extension);

    storage.put(&key, data, Some(content_type)).await?;

    let url = storage.public_url(&key);
    info!("Uploaded {} ({})", key, content_type);

    Ok(HttpResponse::Ok().json(UploadResponse { url }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key_accepts_prefixed_names() {
        assert!(validate_key("issue-images/abc_photo_1.jpg").is_ok());
    }

    #[test]
    fn test_validate_key_rejects_traversal() {
        assert!(validate_key("../etc/passwd").is_err());
        assert!(validate_key("/absolute").is_err());
        assert!(validate_key("a\\b").is_err());
        assert!(validate_key("").is_err());
    }
}
