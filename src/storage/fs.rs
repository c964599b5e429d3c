//! Filesystem artifact store
//!
//! One directory per store, one file per key. Writes go to a temporary file
//! in the same directory and are renamed into place, so a crash or a failed
//! write never leaves a truncated file under the final name.

use crate::storage::traits::{check_key, ArtifactStore, StoreError, StoreResult};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Name prefix of in-flight temporary files; such names are never keys
pub const TEMP_PREFIX: &str = ".hbr-tmp";

/// Artifact store backed by a single directory
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    /// Opens a store rooted at `root`, creating the directory if needed
    pub fn new(root: impl AsRef<Path>) -> StoreResult<Self> {
        let root = root.as_ref().to_path_buf();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Opens an existing directory without creating it
    ///
    /// A missing directory behaves as an empty store.
    pub fn open(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of the file backing `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl ArtifactStore for FsStore {
    fn exists(&self, key: &str) -> bool {
        check_key(key).is_ok() && self.path_for(key).is_file()
    }

    fn put(&mut self, key: &str, bytes: &[u8]) -> StoreResult<()> {
        check_key(key)?;
        std::fs::create_dir_all(&self.root)?;

        let mut tmp = tempfile::Builder::new()
            .prefix(TEMP_PREFIX)
            .tempfile_in(&self.root)?;
        tmp.write_all(bytes)?;
        tmp.as_file().sync_all()?;
        tmp.persist(self.path_for(key))
            .map_err(|e| StoreError::Io(e.error))?;

        tracing::trace!("Wrote {} bytes to {}", bytes.len(), self.path_for(key).display());
        Ok(())
    }

    fn get(&self, key: &str) -> StoreResult<Vec<u8>> {
        check_key(key)?;
        match std::fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StoreError::NotFound(key.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        let entries = match std::fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut keys = Vec::new();
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if !name.starts_with(TEMP_PREFIX) {
                    keys.push(name.to_string());
                }
            }
        }
        keys.sort();
        Ok(keys)
    }
}
