//! Storage module for persisting output artifacts
//!
//! This module handles where the raw text copies and rendered PDFs end up:
//! - The `ArtifactStore` trait used by the crawl loop
//! - A directory-backed store with atomic writes
//! - An in-memory store for tests
//!
//! The PDF store doubles as the dedup index: a key that exists is never
//! fetched again.

mod fs;
mod memory;
mod traits;

pub use fs::{FsStore, TEMP_PREFIX};
pub use memory::MemoryStore;
pub use traits::{ArtifactStore, StoreError, StoreResult};

use crate::config::OutputConfig;

/// Opens (and creates) the text and PDF stores named in the configuration
///
/// # Returns
///
/// * `Ok((articles, pdfs))` - Both directories exist
/// * `Err(ExportError)` - A directory could not be created
pub fn open_stores(output: &OutputConfig) -> crate::Result<(FsStore, FsStore)> {
    let articles = FsStore::new(&output.articles_dir)?;
    let pdfs = FsStore::new(&output.pdfs_dir)?;
    Ok((articles, pdfs))
}
