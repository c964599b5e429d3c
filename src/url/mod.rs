//! URL handling module
//!
//! This module validates the base URL, builds listing-page URLs, resolves
//! article links, and derives the output file names used for dedup.

mod naming;

pub use naming::{pdf_key, text_key, MAX_TITLE_CHARS};

use crate::{UrlError, UrlResult};
use url::Url;

/// Validates a user-supplied base URL
///
/// The URL must literally start with `http://` or `https://` and parse.
///
/// # Examples
///
/// ```
/// use hbr_archiver::url::validate_base_url;
///
/// assert!(validate_base_url("https://hbr.org/").is_ok());
/// assert!(validate_base_url("hbr.org").is_err());
/// ```
pub fn validate_base_url(url_str: &str) -> UrlResult<Url> {
    let trimmed = url_str.trim();
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(UrlError::InvalidScheme(trimmed.to_string()));
    }

    Url::parse(trimmed).map_err(|e| UrlError::Parse(e.to_string()))
}

/// Builds the URL of one listing page by appending `page=<n>` to the query
///
/// Existing query parameters are preserved.
pub fn listing_page_url(base_url: &Url, page: u32) -> Url {
    let mut url = base_url.clone();
    url.query_pairs_mut()
        .append_pair("page", &page.to_string());
    url
}

/// Resolves an anchor href to an absolute article URL
///
/// Returns None if the link should be excluded:
/// - javascript:, mailto:, tel: schemes
/// - data: URIs
/// - fragment-only anchors
/// - Invalid URLs
/// - Non-HTTP(S) URLs after resolution
pub fn resolve_article_url(href: &str, base_url: &Url) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    match base_url.join(href) {
        Ok(absolute_url) if matches!(absolute_url.scheme(), "http" | "https") => Some(absolute_url),
        _ => None,
    }
}
