//! State module for tracking download progress
//!
//! # Components
//!
//! - `ArticleOutcome`: What happened to a single article link
//! - `DownloadSession`: Per-run counters used to stop the crawl early

mod article_state;
mod session;

// Re-export main types
pub use article_state::ArticleOutcome;
pub use session::DownloadSession;
