//! S3-compatible blob storage client.
//!
//! This crate provides:
//! - File and byte upload for finished videos and narration scripts
//! - Download to local paths for pipeline inputs
//! - Public URL derivation for uploaded artifacts
//! - Object deletion

pub mod client;
pub mod error;

pub use client::{BlobClient, BlobConfig};
pub use error::{StorageError, StorageResult};
