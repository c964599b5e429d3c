use crate::state::ArticleOutcome;
use std::collections::HashMap;

/// Counters for one crawl run
///
/// Lives only as long as the run; an interrupted run loses it and the next
/// run rebuilds what matters from the files on disk.
#[derive(Debug, Clone, Default)]
pub struct DownloadSession {
    max_articles: u32,
    downloaded: u32,
    outcomes: HashMap<ArticleOutcome, u32>,
    pages_crawled: u32,
    pages_failed: u32,
}

impl DownloadSession {
    pub fn new(max_articles: u32) -> Self {
        Self {
            max_articles,
            ..Self::default()
        }
    }

    /// Records the outcome of one article link
    pub fn record(&mut self, outcome: ArticleOutcome) {
        *self.outcomes.entry(outcome).or_insert(0) += 1;
        if outcome.is_success() {
            self.downloaded += 1;
        }
    }

    pub fn record_page(&mut self) {
        self.pages_crawled += 1;
    }

    pub fn record_page_failure(&mut self) {
        self.pages_failed += 1;
    }

    /// True once the download target is reached
    pub fn is_full(&self) -> bool {
        self.downloaded >= self.max_articles
    }

    pub fn downloaded(&self) -> u32 {
        self.downloaded
    }

    pub fn max_articles(&self) -> u32 {
        self.max_articles
    }

    pub fn pages_crawled(&self) -> u32 {
        self.pages_crawled
    }

    pub fn pages_failed(&self) -> u32 {
        self.pages_failed
    }

    /// Number of article links that ended with `outcome`
    pub fn count(&self, outcome: ArticleOutcome) -> u32 {
        self.outcomes.get(&outcome).copied().unwrap_or(0)
    }
}
