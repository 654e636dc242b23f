//! Object storage transport using Apache OpenDAL.
//!
//! This module provides the write path to durable object storage:
//! - S3-compatible: Cloudflare R2, Supabase Storage, AWS S3
//!
//! The transport is a leaf dependency: one stateless `put` per call, safe
//! for concurrent reuse, with failures returned as typed values. Retry
//! policy lives above it, in the upload service.

mod error;
mod transport;

pub use error::StorageError;
pub use transport::{ObjectTransport, S3Transport};
