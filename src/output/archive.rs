//! Zip bundling of rendered documents

use crate::storage::{ArtifactStore, StoreError, TEMP_PREFIX};
use std::io::Write;
use std::path::Path;
use thiserror::Error;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Errors that can occur while writing the archive
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Failed to read artifact: {0}")]
    Store(#[from] StoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes every artifact in `store` into a zip file at `path`
///
/// Entries are named by key alone, so the archive has no directory
/// structure. The zip is assembled next to `path` and renamed into place.
///
/// # Returns
///
/// * `Ok(usize)` - Number of entries written
/// * `Err(ArchiveError)` - Reading an artifact or writing the zip failed
pub fn build_archive<S: ArtifactStore + ?Sized>(
    store: &S,
    path: &Path,
) -> Result<usize, ArchiveError> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(parent)?;

    let keys = store.keys()?;
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut tmp = tempfile::Builder::new()
        .prefix(TEMP_PREFIX)
        .tempfile_in(parent)?;
    {
        let mut zip = ZipWriter::new(tmp.as_file_mut());
        for key in &keys {
            let bytes = store.get(key)?;
            zip.start_file(key.as_str(), options)?;
            zip.write_all(&bytes)?;
        }
        zip.finish()?;
    }
    tmp.persist(path).map_err(|e| ArchiveError::Io(e.error))?;

    tracing::info!("Archived {} files into {}", keys.len(), path.display());
    Ok(keys.len())
}
