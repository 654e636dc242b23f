//! Upload request and result types.

use bytes::Bytes;

/// A single logical upload request.
///
/// Created per call and discarded once the call settles; nothing here is
/// persisted by this crate.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    /// Opaque binary payload.
    pub payload: Bytes,
    /// Original file name as supplied by the caller.
    pub file_name: String,
    /// Logical destination folder; the configured default applies when
    /// absent or empty.
    pub folder: Option<String>,
    /// Declared MIME type; a generic binary type applies when absent or
    /// empty.
    pub content_type: Option<String>,
}

impl UploadRequest {
    /// Create a request with default folder and content type.
    #[must_use]
    pub fn new(payload: Bytes, file_name: impl Into<String>) -> Self {
        Self {
            payload,
            file_name: file_name.into(),
            folder: None,
            content_type: None,
        }
    }

    /// Set the logical destination folder.
    #[must_use]
    pub fn with_folder(mut self, folder: impl Into<String>) -> Self {
        self.folder = Some(folder.into());
        self
    }

    /// Set the declared MIME type.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// The durable result of a successful upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedObject {
    /// Publicly retrievable URL.
    pub url: String,
    /// Storage key the object was written under.
    pub key: String,
}
