//! Object storage backends for uploaded images.
//!
//! The service stores car type, car model, and branding images in an
//! object store behind the [`ObjectStore`] trait. Two backends exist: a
//! filesystem store for local development (served by the API under
//! `/uploads`) and an S3 store for production.

use async_trait::async_trait;

pub mod local;
pub mod s3;

pub use local::LocalObjectStore;
pub use s3::S3ObjectStore;

/// Errors from object storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Invalid object key '{0}'")]
    InvalidKey(String),

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("S3 error: {0}")]
    S3(String),
}

/// Abstraction over the object storage service holding uploaded images.
///
/// Keys are relative paths like `uploads/<uuid>.png`. Implementations are
/// constructed by the composition root and injected through `AppState`.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store an object, overwriting any existing one under the same key.
    async fn put_object(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError>;

    /// Delete an object. Deleting a missing object is not an error.
    async fn delete_object(&self, key: &str) -> Result<(), StorageError>;

    /// Publicly reachable URL for an object key.
    fn public_url(&self, key: &str) -> String;

    /// Recover the object key from a public URL previously returned by
    /// [`Self::public_url`], or `None` if the URL belongs to a different
    /// store (e.g. after a backend migration). Used to delete superseded
    /// images.
    fn key_for_url(&self, url: &str) -> Option<String>;
}

/// Reject keys that could escape the storage prefix.
pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    let bad = key.is_empty()
        || key.starts_with('/')
        || key.split('/').any(|part| part.is_empty() || part == "." || part == "..");
    if bad {
        return Err(StorageError::InvalidKey(key.to_string()));
    }
    Ok(())
}
