//! Storage configuration.

use crate::error::{StorageError, StorageResult};

/// Configuration for the durable store.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// S3 API endpoint URL
    pub endpoint_url: String,
    /// Access key ID
    pub access_key_id: String,
    /// Secret access key
    pub secret_access_key: String,
    /// Bucket name
    pub bucket_name: String,
    /// Region ("auto" works for most S3-compatible stores)
    pub region: String,
    /// Canonical public address of the bucket. Predicted URLs are
    /// `{public_base_url}/{key}`; point this at a CDN domain if one fronts
    /// the bucket.
    pub public_base_url: String,
}

impl StorageConfig {
    /// Create config from environment variables. Required values are
    /// checked here so a misconfigured process fails at startup, not on the
    /// first upload.
    pub fn from_env() -> StorageResult<Self> {
        let endpoint_url = std::env::var("STORAGE_ENDPOINT_URL")
            .map_err(|_| StorageError::config_error("STORAGE_ENDPOINT_URL not set"))?;
        let bucket_name = std::env::var("STORAGE_BUCKET_NAME")
            .map_err(|_| StorageError::config_error("STORAGE_BUCKET_NAME not set"))?;

        let public_base_url = std::env::var("STORAGE_PUBLIC_BASE_URL").unwrap_or_else(|_| {
            format!("{}/{}", endpoint_url.trim_end_matches('/'), bucket_name)
        });

        Ok(Self {
            access_key_id: std::env::var("STORAGE_ACCESS_KEY_ID")
                .map_err(|_| StorageError::config_error("STORAGE_ACCESS_KEY_ID not set"))?,
            secret_access_key: std::env::var("STORAGE_SECRET_ACCESS_KEY")
                .map_err(|_| StorageError::config_error("STORAGE_SECRET_ACCESS_KEY not set"))?,
            region: std::env::var("STORAGE_REGION").unwrap_or_else(|_| "auto".to_string()),
            endpoint_url,
            bucket_name,
            public_base_url,
        })
    }

    /// The public URL an object at `key` is (or will be) served from.
    pub fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_base_url.trim_end_matches('/'), key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(public_base_url: &str) -> StorageConfig {
        StorageConfig {
            endpoint_url: "https://storage.example.com".to_string(),
            access_key_id: "key".to_string(),
            secret_access_key: "secret".to_string(),
            bucket_name: "media".to_string(),
            region: "auto".to_string(),
            public_base_url: public_base_url.to_string(),
        }
    }

    #[test]
    fn test_public_url_joins_key() {
        let cfg = config("https://storage.example.com/media");
        assert_eq!(
            cfg.public_url("videos/1-000000001-clip.ogv"),
            "https://storage.example.com/media/videos/1-000000001-clip.ogv"
        );
    }

    #[test]
    fn test_public_url_tolerates_trailing_slash() {
        let cfg = config("https://cdn.example.com/");
        assert_eq!(cfg.public_url("videos/a.ogv"), "https://cdn.example.com/videos/a.ogv");
    }
}
