//! Upload service implementation.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use brickfund_shared::StorageConfig;

use crate::storage::{ObjectTransport, S3Transport, StorageError};

use super::error::UploadError;
use super::key::generate_object_key;
use super::types::{UploadRequest, UploadedObject};

/// MIME type used when the caller does not declare one.
const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Upload service for property documents and media.
///
/// One call uploads one payload and settles as either a durable URL or a
/// typed failure. Transient provider failures are retried with exponential
/// backoff within the configured attempt budget. Calls share no mutable
/// state: each owns its attempt counter, its storage key, and its backoff
/// timer, so any number of uploads may run concurrently over one service.
pub struct UploadService<T: ObjectTransport> {
    transport: Arc<T>,
    config: StorageConfig,
}

impl UploadService<S3Transport> {
    /// Create a service backed by the S3 transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage provider cannot be initialized.
    pub fn from_config(config: StorageConfig) -> Result<Self, StorageError> {
        let transport = Arc::new(S3Transport::from_config(&config)?);
        Ok(Self::new(transport, config))
    }
}

impl<T: ObjectTransport> UploadService<T> {
    /// Create a service over an existing transport.
    #[must_use]
    pub fn new(transport: Arc<T>, config: StorageConfig) -> Self {
        Self { transport, config }
    }

    /// Upload a payload and return its durable URL.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::InvalidInput`] for an empty payload,
    /// [`UploadError::Misconfiguration`] when no bucket is configured (both
    /// before any attempt), or [`UploadError::Exhausted`] once the attempt
    /// budget is spent.
    pub async fn upload(&self, request: UploadRequest) -> Result<UploadedObject, UploadError> {
        self.upload_cancellable(request, &CancellationToken::new())
            .await
    }

    /// Upload a payload with a caller-supplied cancellation token.
    ///
    /// The token is checked before every attempt and during every backoff
    /// suspension; cancellation settles the call as
    /// [`UploadError::Canceled`] without starting a further attempt. An
    /// attempt already in flight runs to completion.
    ///
    /// # Errors
    ///
    /// As [`UploadService::upload`], plus [`UploadError::Canceled`].
    pub async fn upload_cancellable(
        &self,
        request: UploadRequest,
        cancel: &CancellationToken,
    ) -> Result<UploadedObject, UploadError> {
        if request.payload.is_empty() {
            return Err(UploadError::invalid_input("payload is empty"));
        }
        if self.config.bucket.is_empty() {
            return Err(UploadError::misconfiguration("bucket is not configured"));
        }

        let folder = self.effective_folder(request.folder.as_deref());
        // Computed once, before the first attempt: every retry of this
        // logical upload targets the same key, so a retry after a partial
        // write overwrites instead of duplicating.
        let key = generate_object_key(folder, &request.file_name);

        let content_type = match request.content_type.as_deref() {
            Some(ct) if !ct.is_empty() => ct,
            _ => DEFAULT_CONTENT_TYPE,
        };

        let max_attempts = self.config.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            if cancel.is_cancelled() {
                return Err(UploadError::Canceled);
            }

            match self
                .transport
                .put(&key, request.payload.clone(), content_type)
                .await
            {
                Ok(()) => {
                    debug!(%key, attempt, "upload succeeded");
                    return Ok(UploadedObject {
                        url: self.object_url(&key),
                        key,
                    });
                }
                Err(err) if attempt < max_attempts => {
                    let delay = backoff_delay(attempt);
                    warn!(
                        %key,
                        attempt,
                        delay_secs = delay.as_secs(),
                        error = %err,
                        "upload attempt failed, backing off"
                    );

                    tokio::select! {
                        () = cancel.cancelled() => return Err(UploadError::Canceled),
                        () = tokio::time::sleep(delay) => {}
                    }

                    attempt += 1;
                }
                Err(err) => {
                    warn!(%key, attempt, error = %err, "upload exhausted");
                    return Err(UploadError::exhausted(attempt, err));
                }
            }
        }
    }

    /// Construct the durable URL for a stored key.
    ///
    /// Virtual-hosted-style against AWS; path-style against a custom
    /// endpoint, so the URL stays consistent with where the object landed.
    #[must_use]
    pub fn object_url(&self, key: &str) -> String {
        match &self.config.endpoint {
            Some(endpoint) => format!(
                "{}/{}/{key}",
                endpoint.trim_end_matches('/'),
                self.config.bucket
            ),
            None => format!(
                "https://{}.s3.{}.amazonaws.com/{key}",
                self.config.bucket, self.config.region
            ),
        }
    }

    /// Resolve the folder for a request, falling back to the configured
    /// default when absent or empty after trimming path separators.
    fn effective_folder<'a>(&'a self, folder: Option<&'a str>) -> &'a str {
        let folder = folder
            .unwrap_or(&self.config.default_folder)
            .trim_matches('/');

        if folder.is_empty() {
            self.config.default_folder.trim_matches('/')
        } else {
            folder
        }
    }
}

/// Backoff delay after failed attempt `n`: `2^n` seconds.
fn backoff_delay(attempt: u32) -> Duration {
    Duration::from_secs(1u64 << attempt.min(16))
}
