//! S3-compatible storage service for issue photo uploads.
//!
//! Targets Cloudflare R2 in production and MinIO in development; both speak
//! the S3 API, so the AWS SDK with a custom endpoint covers both.

use aws_config::BehaviorVersion;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{Credentials, Region};
use tracing::info;

use crate::config::StorageSettings;
use crate::error::{AppError, AppResult};

/// Storage client wrapper.
#[derive(Clone)]
pub struct Storage {
    client: Client,
    bucket: String,
    public_base_url: String,
}

impl Storage {
    /// Create a new storage client from configuration.
    pub async fn new(config: &StorageSettings) -> AppResult<Self> {
        let credentials =
            Credentials::new(&config.access_key, &config.secret_key, None, None, "atlas");

        let region = Region::new(config.region.clone());

        let mut s3_config_builder = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(region)
            .credentials_provider(credentials)
            .force_path_style(true); // Required for MinIO

        // Use custom endpoint for R2/MinIO
        if let Some(ref endpoint) = config.endpoint {
            s3_config_builder = s3_config_builder.endpoint_url(endpoint);
        }

        let s3_config = s3_config_builder.build();
        let client = Client::from_conf(s3_config);

        let storage = Self {
            client,
            bucket: config.bucket.clone(),
            public_base_url: config.public_base_url.trim_end_matches('/').to_string(),
        };

        // Verify bucket exists or create it
        storage.ensure_bucket_exists().await?;

        info!("Object storage initialized: bucket={}", config.bucket);

        Ok(storage)
    }

    /// Ensure the bucket exists, creating it if necessary.
    async fn ensure_bucket_exists(&self) -> AppResult<()> {
        match self.client.head_bucket().bucket(&self.bucket).send().await {
            Ok(_) => {
                info!("Bucket '{}' exists", self.bucket);
                Ok(())
            }
            Err(e) => {
                // Check if it's a "not found" error
                let service_error = e.into_service_error();
                if service_error.is_not_found() {
                    info!("Creating bucket '{}'", self.bucket);
                    self.client
                        .create_bucket()
                        .bucket(&self.bucket)
                        .send()
                        .await
                        .map_err(|e| {
                            AppError::Storage(format!("Failed to create bucket: {}", e))
                        })?;
                    info!("Bucket '{}' created", self.bucket);
                    Ok(())
                } else {
                    Err(AppError::Storage(format!(
                        "Failed to access bucket '{}': {}",
                        self.bucket, service_error
                    )))
                }
            }
        }
    }

    /// Get the content type for a file based on its extension.
    pub fn content_type_for_extension(ext: &str) -> &'static str {
        match ext.to_lowercase().as_str() {
            "png" => "image/png",
            "jpg" | "jpeg" => "image/jpeg",
            "gif" => "image/gif",
            "webp" => "image/webp",
            "svg" => "image/svg+xml",
            "heic" => "image/heic",
            "json" => "application/json",
            "txt" => "text/plain",
            _ => "application/octet-stream",
        }
    }

    /// Upload an object.
    ///
    /// # Arguments
    /// * `key` - The object key (including any logical folder prefix)
    /// * `data` - The file contents as bytes
    /// * `content_type` - Optional content type for the upload
    pub async fn put(&self, key: &str, data: Vec<u8>, content_type: Option<&str>) -> AppResult<()> {
        let body = aws_sdk_s3::primitives::ByteStream::from(data);
        let mut request = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(body);

        if let Some(ct) = content_type {
            request = request.content_type(ct);
        }

        request
            .send()
            .await
            .map_err(|e| AppError::Storage(format!("Failed to upload object: {}", e)))?;

        Ok(())
    }

    /// Public URL of an uploaded object.
    ///
    /// Path segments are percent-encoded individually so slashes in the key
    /// survive as folder separators.
    pub fn public_url(&self, key: &str) -> String {
        let encoded: Vec<String> = key
            .split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect();
        format!("{}/{}", self.public_base_url, encoded.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage_with_base(base: &str) -> Storage {
        // Client construction is pure config; no request is made here.
        let credentials = Credentials::new("k", "s", None, None, "test");
        let config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("auto"))
            .credentials_provider(credentials)
            .build();
        Storage {
            client: Client::from_conf(config),
            bucket: "test".to_string(),
            public_base_url: base.trim_end_matches('/').to_string(),
        }
    }

    #[test]
    fn test_public_url_preserves_folders() {
        let storage = storage_with_base("https://uploads.example.org/");
        assert_eq!(
            storage.public_url("issue-images/abc_photo_1.jpg"),
            "https://uploads.example.org/issue-images/abc_photo_1.jpg"
        );
    }

    #[test]
    fn test_public_url_encodes_segments() {
        let storage = storage_with_base("https://uploads.example.org");
        assert_eq!(
            storage.public_url("issue-images/my photo.jpg"),
            "https://uploads.example.org/issue-images/my%20photo.jpg"
        );
    }

    #[test]
    fn test_content_type_for_extension() {
        assert_eq!(Storage::content_type_for_extension("png"), "image/png");
        assert_eq!(Storage::content_type_for_extension("JPG"), "image/jpeg");
        assert_eq!(Storage::content_type_for_extension("webp"), "image/webp");
        assert_eq!(
            Storage::content_type_for_extension("exe"),
            "application/octet-stream"
        );
    }
}
