//! Upload error types.

use thiserror::Error;

use brickfund_shared::AppError;

use crate::storage::StorageError;

/// Upload operation errors.
///
/// `InvalidInput` and `Misconfiguration` are surfaced before any attempt is
/// made. Transient transport failures are retried internally; only the last
/// one reaches the caller, wrapped in `Exhausted`.
#[derive(Debug, Error)]
pub enum UploadError {
    /// Payload failed validation; no attempt was made.
    #[error("invalid upload input: {0}")]
    InvalidInput(String),

    /// Required storage configuration is missing; no attempt was made.
    #[error("storage misconfiguration: {0}")]
    Misconfiguration(String),

    /// Every permitted attempt failed.
    #[error("upload exhausted after {attempts} attempts: {source}")]
    Exhausted {
        /// Number of attempts performed.
        attempts: u32,
        /// The last transport failure observed.
        source: StorageError,
    },

    /// The caller canceled the upload before it settled.
    #[error("upload canceled")]
    Canceled,
}

impl UploadError {
    /// Create an invalid input error.
    #[must_use]
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a misconfiguration error.
    #[must_use]
    pub fn misconfiguration(msg: impl Into<String>) -> Self {
        Self::Misconfiguration(msg.into())
    }

    /// Create an exhausted error.
    #[must_use]
    pub fn exhausted(attempts: u32, source: StorageError) -> Self {
        Self::Exhausted { attempts, source }
    }
}

impl From<UploadError> for AppError {
    fn from(err: UploadError) -> Self {
        match err {
            UploadError::InvalidInput(msg) => Self::Validation(msg),
            UploadError::Misconfiguration(msg) => Self::Internal(msg),
            UploadError::Exhausted { attempts, source } => Self::ExternalService(format!(
                "upload exhausted after {attempts} attempts: {source}"
            )),
            UploadError::Canceled => Self::Internal("upload canceled".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = UploadError::exhausted(3, StorageError::operation("timed out"));
        assert_eq!(
            err.to_string(),
            "upload exhausted after 3 attempts: storage operation failed: timed out"
        );
    }

    #[test]
    fn test_app_error_mapping() {
        let err: AppError = UploadError::invalid_input("payload is empty").into();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "VALIDATION_ERROR");

        let err: AppError = UploadError::misconfiguration("bucket is not configured").into();
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.error_code(), "INTERNAL_ERROR");

        let err: AppError =
            UploadError::exhausted(3, StorageError::operation("throttled")).into();
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.error_code(), "EXTERNAL_SERVICE_ERROR");
    }
}
