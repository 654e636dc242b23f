//! Storage transport implementation using Apache OpenDAL.

use bytes::Bytes;
use opendal::{Operator, services};

use brickfund_shared::StorageConfig;

use super::error::StorageError;

/// Transport trait for writing objects to durable storage.
///
/// This trait is the seam between the upload service and the provider SDK:
/// production code uses [`S3Transport`], tests inject fakes that simulate
/// provider failures.
pub trait ObjectTransport: Send + Sync {
    /// Write one object under `key`.
    fn put(
        &self,
        key: &str,
        payload: Bytes,
        content_type: &str,
    ) -> impl std::future::Future<Output = Result<(), StorageError>> + Send;
}

/// S3-compatible storage transport (AWS S3, Cloudflare R2, Supabase).
///
/// The operator is built once from configuration and carries no per-call
/// mutable state, so one instance serves any number of concurrent uploads.
#[derive(Debug)]
pub struct S3Transport {
    operator: Operator,
}

impl S3Transport {
    /// Create a transport from storage configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage provider cannot be initialized.
    pub fn from_config(config: &StorageConfig) -> Result<Self, StorageError> {
        let mut builder = services::S3::default()
            .bucket(&config.bucket)
            .region(&config.region)
            .access_key_id(&config.access_key_id)
            .secret_access_key(&config.secret_access_key);

        if let Some(endpoint) = &config.endpoint {
            builder = builder.endpoint(endpoint);
        }

        let operator = Operator::new(builder)
            .map_err(|e| StorageError::configuration(e.to_string()))?
            .finish();

        Ok(Self { operator })
    }
}

impl ObjectTransport for S3Transport {
    async fn put(
        &self,
        key: &str,
        payload: Bytes,
        content_type: &str,
    ) -> Result<(), StorageError> {
        self.operator
            .write_with(key, payload)
            .content_type(content_type)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_builds_operator() {
        let config = StorageConfig::new("brickfund-media").with_region("eu-central-1");
        assert!(S3Transport::from_config(&config).is_ok());
    }

    #[test]
    fn test_from_config_rejects_empty_bucket() {
        let config = StorageConfig::new("");
        let err = S3Transport::from_config(&config).unwrap_err();
        assert!(matches!(err, StorageError::Configuration(_)));
    }
}
