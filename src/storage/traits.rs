//! Storage traits and error types
//!
//! This module defines the trait interface for artifact backends and
//! associated error types.

use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Artifact not found: {0}")]
    NotFound(String),

    #[error("Invalid artifact key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations
pub type StoreResult<T> = Result<T, StoreError>;

/// A flat key/value store for output artifacts
///
/// Keys are plain file names. A key that `exists` is treated as complete,
/// so implementations must never expose a partially written value.
pub trait ArtifactStore {
    /// Returns true if a complete artifact is stored under `key`
    fn exists(&self, key: &str) -> bool;

    /// Stores `bytes` under `key`, replacing any previous value
    fn put(&mut self, key: &str, bytes: &[u8]) -> StoreResult<()>;

    /// Reads the artifact stored under `key`
    fn get(&self, key: &str) -> StoreResult<Vec<u8>>;

    /// Lists all stored keys in sorted order
    fn keys(&self) -> StoreResult<Vec<String>>;
}

impl<S: ArtifactStore + ?Sized> ArtifactStore for Box<S> {
    fn exists(&self, key: &str) -> bool {
        (**self).exists(key)
    }

    fn put(&mut self, key: &str, bytes: &[u8]) -> StoreResult<()> {
        (**self).put(key, bytes)
    }

    fn get(&self, key: &str) -> StoreResult<Vec<u8>> {
        (**self).get(key)
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        (**self).keys()
    }
}

/// Rejects keys that would escape a flat namespace
pub(crate) fn check_key(key: &str) -> StoreResult<()> {
    if key.is_empty()
        || key == "."
        || key == ".."
        || key.contains('/')
        || key.contains('\\')
        || key.contains('\0')
    {
        return Err(StoreError::InvalidKey(key.to_string()));
    }
    Ok(())
}
