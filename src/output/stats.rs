//! Run reports and output listings
//!
//! This module turns a finished download session into a summary and prints
//! the contents of the PDF directory.

use crate::state::{ArticleOutcome, DownloadSession};
use crate::storage::{ArtifactStore, StoreResult};
use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// Summary of one crawl run
#[derive(Debug, Clone)]
pub struct RunReport {
    /// New articles written this run
    pub downloaded: u32,

    /// Target the run was started with
    pub max_articles: u32,

    /// Listing pages fetched successfully
    pub pages_crawled: u32,

    /// Listing pages that failed to fetch
    pub pages_failed: u32,

    /// Links skipped because their PDF already existed
    pub already_downloaded: u32,

    /// Articles that failed extraction or came out empty
    pub extract_failed: u32,

    /// Articles whose text or PDF could not be written
    pub render_failed: u32,

    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,

    /// Archive written at the end of the run, with its entry count
    pub archive: Option<(PathBuf, usize)>,

    /// Fingerprint of the configuration file the run was started with;
    /// None when only built-in defaults and flags were used
    pub config_hash: Option<String>,
}

impl RunReport {
    /// Builds a report from a finished session
    pub fn from_session(session: &DownloadSession, started_at: DateTime<Utc>) -> Self {
        Self {
            downloaded: session.downloaded(),
            max_articles: session.max_articles(),
            pages_crawled: session.pages_crawled(),
            pages_failed: session.pages_failed(),
            already_downloaded: session.count(ArticleOutcome::AlreadyDownloaded),
            extract_failed: session.count(ArticleOutcome::ExtractFailed)
                + session.count(ArticleOutcome::EmptyContent),
            render_failed: session.count(ArticleOutcome::WriteFailed)
                + session.count(ArticleOutcome::RenderFailed),
            started_at,
            finished_at: Utc::now(),
            archive: None,
            config_hash: None,
        }
    }

    pub fn duration_seconds(&self) -> i64 {
        (self.finished_at - self.started_at).num_seconds()
    }

    /// Completed fraction of the target
    pub fn fraction(&self) -> f64 {
        if self.max_articles == 0 {
            return 1.0;
        }
        self.downloaded as f64 / self.max_articles as f64
    }
}

/// Prints a run report to stdout
pub fn print_report(report: &RunReport) {
    println!("=== Download Summary ===\n");

    println!(
        "Downloaded: {} / {} articles ({:.0}%)",
        report.downloaded,
        report.max_articles,
        report.fraction() * 100.0
    );
    println!(
        "Listing pages: {} crawled, {} failed",
        report.pages_crawled, report.pages_failed
    );
    println!("Already downloaded (skipped): {}", report.already_downloaded);

    if report.extract_failed > 0 || report.render_failed > 0 {
        println!("Extraction failures: {}", report.extract_failed);
        println!("Render failures: {}", report.render_failed);
    }

    println!("Duration: {}s", report.duration_seconds());
    match &report.config_hash {
        Some(hash) => println!("Configuration: {}", short_hash(hash)),
        None => println!("Configuration: defaults"),
    }

    if let Some((path, entries)) = &report.archive {
        println!(
            "\nArchive ready: {} ({} files)",
            path.display(),
            entries
        );
    }
}

fn short_hash(hash: &str) -> &str {
    hash.get(..12).unwrap_or(hash)
}

/// Lists the PDF keys currently in `store`
pub fn list_documents<S: ArtifactStore + ?Sized>(store: &S) -> StoreResult<Vec<String>> {
    Ok(store
        .keys()?
        .into_iter()
        .filter(|key| key.ends_with(".pdf"))
        .collect())
}

/// Prints the listing produced by [`list_documents`]
pub fn print_listing(location: &str, documents: &[String]) {
    if documents.is_empty() {
        println!("No PDF files downloaded yet.");
        return;
    }

    println!("Found {} PDF files in {}:", documents.len(), location);
    for name in documents {
        println!("  - {}", name);
    }
}
