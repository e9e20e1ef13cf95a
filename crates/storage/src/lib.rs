//! Object storage for media assets (audio clips, images) referenced by
//! lessons and exercises.
//!
//! [`ObjectStore`] is the seam the HTTP layer talks to. [`S3ObjectStore`]
//! implements it against any S3-compatible endpoint, including the Google
//! Cloud Storage interoperability API.

pub mod config;
pub mod s3;

use std::time::Duration;

use async_trait::async_trait;

pub use config::StorageConfig;
pub use s3::S3ObjectStore;

/// Cache policy attached to every uploaded object.
pub const PUBLIC_CACHE_CONTROL: &str = "public, max-age=86400";

/// Longest key accepted by S3 and GCS.
pub const MAX_KEY_BYTES: usize = 1024;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Invalid object key '{key}': {reason}")]
    InvalidKey { key: String, reason: &'static str },

    #[error("Object not found: {0}")]
    NotFound(String),

    #[error("Storage backend error: {0}")]
    Backend(String),

    #[error("Could not presign URL: {0}")]
    Presign(String),
}

/// Bytes and content type of a downloaded object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

/// A bucket of named objects.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store `bytes` under `key`, replacing any existing object, and return
    /// its public URL.
    async fn upload(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError>;

    async fn download(&self, key: &str) -> Result<StoredObject, StorageError>;

    /// Remove `key`. Removing a missing object is not an error.
    async fn delete(&self, key: &str) -> Result<(), StorageError>;

    /// Time-limited GET URL for `key`.
    async fn signed_url(&self, key: &str, expires_in: Duration) -> Result<String, StorageError>;
}

/// Reject keys that are empty, absolute, contain `.`/`..` or empty path
/// segments, contain control characters, or exceed [`MAX_KEY_BYTES`].
pub fn validate_object_key(key: &str) -> Result<(), StorageError> {
    let invalid = |reason: &'static str| -> Result<(), StorageError> {
        Err(StorageError::InvalidKey {
            key: key.to_string(),
            reason,
        })
    };

    if key.is_empty() {
        return invalid("key is empty");
    }
    if key.len() > MAX_KEY_BYTES {
        return invalid("key is longer than 1024 bytes");
    }
    if key.starts_with('/') {
        return invalid("key must not start with '/'");
    }
    if key.chars().any(char::is_control) {
        return invalid("key contains control characters");
    }
    if key
        .split('/')
        .any(|segment| segment.is_empty() || segment == "." || segment == "..")
    {
        return invalid("key contains an empty, '.' or '..' segment");
    }
    Ok(())
}

/// Public URL of `key` in `bucket`, e.g.
/// `https://storage.googleapis.com/{bucket}/{key}`.
pub fn public_object_url(base_url: &str, bucket: &str, key: &str) -> String {
    format!("{}/{bucket}/{key}", base_url.trim_end_matches('/'))
}
