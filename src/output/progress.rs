//! Progress reporting hooks
//!
//! The crawl loop reports through this trait instead of writing to any
//! particular UI, so the same loop can drive a terminal, a test recorder,
//! or nothing at all.

use crate::state::ArticleOutcome;

/// Receives progress events from a crawl run
///
/// All methods except `progress` default to doing nothing.
pub trait ProgressReporter {
    /// A listing page is about to be fetched
    fn page_started(&self, _page: u32, _url: &str) {}

    /// A listing page could not be fetched; the crawl moves on
    fn page_failed(&self, _page: u32, _error: &str) {}

    /// An article link finished with `outcome`
    fn article_finished(&self, _url: &str, _outcome: ArticleOutcome) {}

    /// The download count changed; `downloaded / max_articles` is the
    /// completed fraction
    fn progress(&self, downloaded: u32, max_articles: u32);
}

/// Reports progress through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl ProgressReporter for LogReporter {
    fn page_started(&self, page: u32, url: &str) {
        tracing::info!("Fetching listing page {}: {}", page, url);
    }

    fn page_failed(&self, page: u32, error: &str) {
        tracing::error!("Error processing page {}: {}", page, error);
    }

    fn article_finished(&self, url: &str, outcome: ArticleOutcome) {
        if outcome.is_error() {
            tracing::warn!("Failed {} ({})", url, outcome);
        } else if outcome.is_skipped() {
            tracing::debug!("Skipped {} ({})", url, outcome);
        } else {
            tracing::debug!("{}: {}", url, outcome);
        }
    }

    fn progress(&self, downloaded: u32, max_articles: u32) {
        let percent = if max_articles > 0 {
            downloaded as f64 / max_articles as f64 * 100.0
        } else {
            100.0
        };
        tracing::info!(
            "Downloaded {}/{} articles ({:.0}%)",
            downloaded,
            max_articles,
            percent
        );
    }
}

/// Discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl ProgressReporter for NullReporter {
    fn progress(&self, _downloaded: u32, _max_articles: u32) {}
}
