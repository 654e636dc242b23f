//! Shared types, errors, and configuration for Brickfund.
//!
//! This crate provides common types used across all other crates:
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;

pub use config::{AppConfig, StorageConfig};
pub use error::{AppError, AppResult};
