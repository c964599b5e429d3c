use crate::storage::traits::{check_key, ArtifactStore, StoreError, StoreResult};
use std::collections::BTreeMap;

/// In-memory artifact store, mainly for tests and dry runs
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    artifacts: BTreeMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

impl ArtifactStore for MemoryStore {
    fn exists(&self, key: &str) -> bool {
        self.artifacts.contains_key(key)
    }

    fn put(&mut self, key: &str, bytes: &[u8]) -> StoreResult<()> {
        check_key(key)?;
        self.artifacts.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    fn get(&self, key: &str) -> StoreResult<Vec<u8>> {
        self.artifacts
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        Ok(self.artifacts.keys().cloned().collect())
    }
}
