//! Document rendering
//!
//! Turns an extracted `(title, body)` pair into a PDF:
//! - `layout` wraps text and assigns lines to pages
//! - `pdf` paints the layout with printpdf
//!
//! # Example
//!
//! ```no_run
//! use hbr_archiver::render::DocumentRenderer;
//!
//! let renderer = DocumentRenderer::new();
//! let bytes = renderer.render("Example", "Body text").unwrap();
//! assert!(bytes.starts_with(b"%PDF"));
//! ```

mod layout;
mod pdf;

pub use layout::{
    layout_document, wrap_text, FontKind, PageLayout, PageStyle, PlacedLine, PAGE_HEIGHT_MM,
    PAGE_WIDTH_MM,
};

use crate::storage::{ArtifactStore, StoreError};
use thiserror::Error;

/// Errors that can occur while producing a document
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PDF generation failed: {0}")]
    Pdf(String),

    #[error("Failed to store document: {0}")]
    Store(#[from] StoreError),
}

/// Renders articles as paginated PDFs
#[derive(Debug, Clone, Default)]
pub struct DocumentRenderer {
    style: PageStyle,
}

impl DocumentRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes the page layout without producing any PDF bytes
    pub fn layout(&self, title: &str, body: &str) -> Vec<PageLayout> {
        layout_document(title, body, &self.style)
    }

    /// Renders a complete PDF in memory
    pub fn render(&self, title: &str, body: &str) -> Result<Vec<u8>, RenderError> {
        let pages = self.layout(title, body);
        pdf::paint(&pages, title)
    }

    /// Renders a PDF and stores it under `key`
    ///
    /// Nothing is stored if rendering fails.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - Number of pages written
    /// * `Err(RenderError)` - Rendering or the store write failed
    pub fn render_to<S: ArtifactStore + ?Sized>(
        &self,
        title: &str,
        body: &str,
        store: &mut S,
        key: &str,
    ) -> Result<usize, RenderError> {
        let pages = self.layout(title, body);
        let bytes = pdf::paint(&pages, title)?;
        store.put(key, &bytes)?;
        Ok(pages.len())
    }
}
