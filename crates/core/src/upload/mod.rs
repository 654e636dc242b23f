//! Upload orchestration for property documents and media.
//!
//! This module provides the write path used by listing, project, and KYC
//! flows: accept a binary payload and a logical folder, return a durable
//! retrievable URL, masking transient storage failures behind bounded
//! retries with exponential backoff.

mod error;
mod key;
mod service;
mod types;

pub use error::UploadError;
pub use key::generate_object_key;
pub use service::UploadService;
pub use types::{UploadRequest, UploadedObject};
