//! Storage transport error types.

use thiserror::Error;

/// Storage transport errors.
///
/// Any failure raised by the provider during an upload attempt (network,
/// throttling, timeout) is treated as transient by the upload service and
/// retried within the attempt budget.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Storage provider configuration error.
    #[error("storage configuration error: {0}")]
    Configuration(String),

    /// Provider operation failed.
    #[error("storage operation failed: {0}")]
    Operation(String),
}

impl StorageError {
    /// Create a configuration error.
    #[must_use]
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create an operation error.
    #[must_use]
    pub fn operation(msg: impl Into<String>) -> Self {
        Self::Operation(msg.into())
    }
}

impl From<opendal::Error> for StorageError {
    fn from(err: opendal::Error) -> Self {
        match err.kind() {
            opendal::ErrorKind::ConfigInvalid => Self::Configuration(err.to_string()),
            _ => Self::Operation(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            StorageError::configuration("missing bucket").to_string(),
            "storage configuration error: missing bucket"
        );
        assert_eq!(
            StorageError::operation("connection reset").to_string(),
            "storage operation failed: connection reset"
        );
    }
}
