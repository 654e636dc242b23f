//! Core upload logic for Brickfund.
//!
//! This crate contains the object upload service with ZERO web or database
//! dependencies. Persistence of listings, projects, and investments is owned
//! by external collaborators; the only durable side effect here is the
//! object written to storage.
//!
//! # Modules
//!
//! - `storage` - Object storage transport (OpenDAL)
//! - `upload` - Upload orchestration: key derivation, retry, backoff

pub mod storage;
pub mod upload;
