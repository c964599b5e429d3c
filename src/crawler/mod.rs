//! Crawler module for listing traversal and article downloads
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching
//! - Listing page link extraction
//! - Article content extraction
//! - Politeness throttling
//! - The overall download loop

mod controller;
mod extractor;
mod fetcher;
mod parser;
mod throttle;

pub use controller::CrawlController;
pub use extractor::{
    extract_document, ArticleDocument, ArticleSelectors, ContentExtractor, ExtractError, UNTITLED,
};
pub use fetcher::{build_http_client, fetch_html, FetchError};
pub use parser::extract_article_links;
pub use throttle::Throttle;

use crate::config::{validate, Config};
use crate::output::{build_archive, ProgressReporter, RunReport};
use crate::storage::open_stores;
use crate::url::validate_base_url;
use std::path::PathBuf;

/// Runs a complete download operation
///
/// This is the main entry point for a run. It will:
/// 1. Validate the configuration (the only fatal error class)
/// 2. Create the text and PDF directories
/// 3. Crawl the configured page range
/// 4. Bundle the PDF directory into the archive if anything new was saved
///
/// A failure to write the archive is logged and leaves `report.archive`
/// empty; the downloaded files are unaffected.
///
/// # Example
///
/// ```no_run
/// use hbr_archiver::config::load_config;
/// use hbr_archiver::crawler::run_crawl;
/// use hbr_archiver::output::LogReporter;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new("archiver.toml"))?;
/// let report = run_crawl(&config, &LogReporter).await?;
/// println!("{} articles saved", report.downloaded);
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(
    config: &Config,
    progress: &dyn ProgressReporter,
) -> crate::Result<RunReport> {
    validate(config)?;
    let base_url = validate_base_url(&config.crawl.base_url)?;

    let (articles, pdfs) = open_stores(&config.output)?;
    let mut controller = CrawlController::new(config, articles, pdfs)?;

    let mut report = controller
        .run(
            &base_url,
            config.crawl.start_page,
            config.crawl.end_page,
            config.crawl.max_articles,
            progress,
        )
        .await;

    if report.downloaded > 0 {
        let archive_path = PathBuf::from(&config.output.archive_path);
        match build_archive(controller.pdfs(), &archive_path) {
            Ok(entries) => report.archive = Some((archive_path, entries)),
            Err(e) => tracing::error!(
                "Failed to build archive {}: {}",
                archive_path.display(),
                e
            ),
        }
    }

    Ok(report)
}
