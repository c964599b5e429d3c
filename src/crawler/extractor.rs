//! Article content extraction
//!
//! Pulls a title and plain-text body out of an article page using the
//! configured selectors. Script, style and page-chrome elements inside the
//! body container never contribute text.

use crate::config::{parse_selector, SelectorConfig};
use crate::crawler::fetcher::{fetch_html, FetchError};
use crate::ConfigError;
use reqwest::Client;
use scraper::{ElementRef, Html, Node, Selector};
use thiserror::Error;

/// Title used when the page has no heading at all
pub const UNTITLED: &str = "Untitled";

/// Elements whose subtrees are dropped from the body text
const STRIPPED_TAGS: &[&str] = &["script", "style", "nav", "footer", "iframe", "button"];

/// Errors that can occur while extracting an article
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("No article body container found")]
    MissingBody,
}

/// Title and plain-text body of one article
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDocument {
    pub title: String,
    pub body: String,
}

impl ArticleDocument {
    /// True if there is something worth saving
    pub fn has_content(&self) -> bool {
        !self.title.trim().is_empty() && !self.body.trim().is_empty()
    }
}

/// Compiled selectors for article pages
#[derive(Debug, Clone)]
pub struct ArticleSelectors {
    title: Selector,
    body_container: Selector,
    body_fallback: Selector,
}

impl ArticleSelectors {
    pub fn from_config(config: &SelectorConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            title: parse_selector(&config.title)?,
            body_container: parse_selector(&config.body_container)?,
            body_fallback: parse_selector(&config.body_fallback)?,
        })
    }
}

/// Fetches article pages and extracts their content
#[derive(Debug, Clone)]
pub struct ContentExtractor {
    client: Client,
    selectors: ArticleSelectors,
}

impl ContentExtractor {
    pub fn new(client: Client, selectors: ArticleSelectors) -> Self {
        Self { client, selectors }
    }

    /// Fetches `url` and extracts its title and body
    ///
    /// Every failure is scoped to this one article.
    pub async fn extract(&self, url: &str) -> Result<ArticleDocument, ExtractError> {
        let html = fetch_html(&self.client, url).await?;
        let document = extract_document(&html, &self.selectors)?;
        tracing::debug!(
            "Extracted '{}' ({} bytes of text) from {}",
            document.title,
            document.body.len(),
            url
        );
        Ok(document)
    }
}

/// Extracts title and body from an already fetched article page
///
/// # Rules
///
/// - Title: trimmed text of the first title match, [`UNTITLED`] only when
///   there is no match; a blank heading yields an empty title
/// - Body: first primary container match, else first fallback match
/// - Text: every remaining text node in document order, trimmed, empty
///   ones dropped, joined with `\n`
///
/// # Example
///
/// ```
/// use hbr_archiver::config::SelectorConfig;
/// use hbr_archiver::crawler::{extract_document, ArticleSelectors};
///
/// let selectors = ArticleSelectors::from_config(&SelectorConfig::default()).unwrap();
/// let html = "<h1>Sample Title</h1><article><script>evil()</script>Hello<p>World</p></article>";
/// let doc = extract_document(html, &selectors).unwrap();
/// assert_eq!(doc.title, "Sample Title");
/// assert_eq!(doc.body, "Hello\nWorld");
/// ```
pub fn extract_document(
    html: &str,
    selectors: &ArticleSelectors,
) -> Result<ArticleDocument, ExtractError> {
    let document = Html::parse_document(html);

    let title = document
        .select(&selectors.title)
        .next()
        .map(|heading| heading.text().collect::<String>().trim().to_string())
        .unwrap_or_else(|| UNTITLED.to_string());

    let container = document
        .select(&selectors.body_container)
        .next()
        .or_else(|| document.select(&selectors.body_fallback).next())
        .ok_or(ExtractError::MissingBody)?;

    let mut segments = Vec::new();
    collect_text(container, &mut segments);

    Ok(ArticleDocument {
        title,
        body: segments.join("\n"),
    })
}

fn collect_text(element: ElementRef<'_>, segments: &mut Vec<String>) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    segments.push(trimmed.to_string());
                }
            }
            Node::Element(el) if STRIPPED_TAGS.contains(&el.name()) => {}
            Node::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    collect_text(child_element, segments);
                }
            }
            _ => {}
        }
    }
}
