//! Crawl controller - the main download loop
//!
//! This module walks the listing pages in order and, for every article link
//! found, coordinates:
//! - Dedup against the PDF store
//! - Content extraction
//! - Writing the raw text and the rendered PDF
//! - Progress reporting and the politeness pause
//!
//! Every error below the run level is soft: it is reported and the loop
//! moves on to the next page or article.

use crate::config::{parse_selector, Config};
use crate::crawler::extractor::{ArticleSelectors, ContentExtractor};
use crate::crawler::fetcher::{build_http_client, fetch_html, FetchError};
use crate::crawler::parser::extract_article_links;
use crate::crawler::throttle::Throttle;
use crate::output::{ProgressReporter, RunReport};
use crate::render::DocumentRenderer;
use crate::state::{ArticleOutcome, DownloadSession};
use crate::storage::ArtifactStore;
use crate::url::{listing_page_url, pdf_key, text_key};
use chrono::Utc;
use reqwest::Client;
use scraper::Selector;
use url::Url;

/// Drives one crawl over a range of listing pages
///
/// `articles` receives the raw text copies, `pdfs` the rendered documents.
/// A key present in `pdfs` marks its article as already downloaded.
pub struct CrawlController<S: ArtifactStore> {
    client: Client,
    link_selector: Selector,
    extractor: ContentExtractor,
    renderer: DocumentRenderer,
    throttle: Throttle,
    articles: S,
    pdfs: S,
}

impl<S: ArtifactStore> CrawlController<S> {
    /// Creates a controller from the configuration and two stores
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlController)` - Ready to run
    /// * `Err(ExportError)` - A selector did not parse or the HTTP client
    ///   could not be built
    pub fn new(config: &Config, articles: S, pdfs: S) -> crate::Result<Self> {
        let client = build_http_client(&config.http)?;
        let link_selector = parse_selector(&config.selectors.article_link)?;
        let selectors = ArticleSelectors::from_config(&config.selectors)?;

        Ok(Self {
            extractor: ContentExtractor::new(client.clone(), selectors),
            client,
            link_selector,
            renderer: DocumentRenderer::new(),
            throttle: Throttle::from_millis(config.http.politeness_delay_ms),
            articles,
            pdfs,
        })
    }

    /// Replaces the politeness throttle
    pub fn with_throttle(mut self, throttle: Throttle) -> Self {
        self.throttle = throttle;
        self
    }

    pub fn articles(&self) -> &S {
        &self.articles
    }

    pub fn pdfs(&self) -> &S {
        &self.pdfs
    }

    /// Runs the crawl loop
    ///
    /// 1. Stops as soon as `max_articles` new articles have been written
    /// 2. For each page in `start_page..=end_page`, fetches the listing
    ///    page and collects article links in document order
    /// 3. Skips links whose PDF already exists without fetching them
    /// 4. Extracts, writes text and PDF, reports progress, then pauses
    ///
    /// `start_page > end_page` or `max_articles == 0` returns immediately
    /// without any request.
    pub async fn run(
        &mut self,
        base_url: &Url,
        start_page: u32,
        end_page: u32,
        max_articles: u32,
        progress: &dyn ProgressReporter,
    ) -> RunReport {
        let started_at = Utc::now();
        let mut session = DownloadSession::new(max_articles);

        tracing::info!(
            "Starting crawl of {} (pages {}-{}, max {} articles, delay {:?})",
            base_url,
            start_page,
            end_page,
            max_articles,
            self.throttle.interval()
        );

        for page in start_page..=end_page {
            if session.is_full() {
                break;
            }

            let page_url = listing_page_url(base_url, page);
            progress.page_started(page, page_url.as_str());

            match self
                .crawl_page(base_url, &page_url, &mut session, progress)
                .await
            {
                Ok(()) => session.record_page(),
                Err(e) => {
                    session.record_page_failure();
                    progress.page_failed(page, &e.to_string());
                }
            }
        }

        let report = RunReport::from_session(&session, started_at);
        tracing::info!(
            "Crawl finished: {} downloaded, {} already present, {} pages failed",
            report.downloaded,
            report.already_downloaded,
            report.pages_failed
        );
        report
    }

    /// Processes every article link on one listing page
    async fn crawl_page(
        &mut self,
        base_url: &Url,
        page_url: &Url,
        session: &mut DownloadSession,
        progress: &dyn ProgressReporter,
    ) -> Result<(), FetchError> {
        let html = fetch_html(&self.client, page_url.as_str()).await?;
        let links = extract_article_links(&html, &self.link_selector, base_url);
        tracing::debug!("Found {} article links on {}", links.len(), page_url);

        for article_url in links {
            if session.is_full() {
                break;
            }

            let outcome = self.process_article(&article_url).await;
            session.record(outcome);
            progress.article_finished(article_url.as_str(), outcome);

            if outcome.is_success() {
                progress.progress(session.downloaded(), session.max_articles());
                // No further request follows once the target is hit
                if !session.is_full() {
                    self.throttle.pause().await;
                }
            }
        }

        Ok(())
    }

    /// Downloads a single article unless its PDF already exists
    async fn process_article(&mut self, article_url: &Url) -> ArticleOutcome {
        let pdf_name = pdf_key(article_url);
        if self.pdfs.exists(&pdf_name) {
            tracing::debug!("Already downloaded: {} ({})", article_url, pdf_name);
            return ArticleOutcome::AlreadyDownloaded;
        }

        let document = match self.extractor.extract(article_url.as_str()).await {
            Ok(document) => document,
            Err(e) => {
                tracing::warn!("Error fetching article {}: {}", article_url, e);
                return ArticleOutcome::ExtractFailed;
            }
        };

        if !document.has_content() {
            tracing::debug!("No content extracted from {}", article_url);
            return ArticleOutcome::EmptyContent;
        }

        let text_name = text_key(&document.title);
        if let Err(e) = self.articles.put(&text_name, document.body.as_bytes()) {
            tracing::warn!("Error saving text for {}: {}", article_url, e);
            return ArticleOutcome::WriteFailed;
        }

        match self
            .renderer
            .render_to(&document.title, &document.body, &mut self.pdfs, &pdf_name)
        {
            Ok(pages) => {
                tracing::info!("Saved '{}' as {} ({} pages)", document.title, pdf_name, pages);
                ArticleOutcome::Downloaded
            }
            Err(e) => {
                tracing::warn!("Error creating PDF for {}: {}", article_url, e);
                ArticleOutcome::RenderFailed
            }
        }
    }
}
