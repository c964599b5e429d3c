//! Listing page parser
//!
//! Finds article links on a listing page. Only anchors matching the
//! configured selector count; everything else on the page is ignored.

use crate::url::resolve_article_url;
use scraper::{Html, Selector};
use url::Url;

/// Extracts article links from a listing page, in document order
///
/// Relative hrefs are resolved against `base_url` (the site URL, not the
/// listing page URL). Anchors without a usable href are skipped.
///
/// # Example
///
/// ```
/// use hbr_archiver::crawler::extract_article_links;
/// use scraper::Selector;
/// use url::Url;
///
/// let html = r#"<a class="article-link" href="/2024/01/slug">Read</a>"#;
/// let selector = Selector::parse("a.article-link").unwrap();
/// let base = Url::parse("https://example.org/").unwrap();
/// let links = extract_article_links(html, &selector, &base);
/// assert_eq!(links[0].as_str(), "https://example.org/2024/01/slug");
/// ```
pub fn extract_article_links(html: &str, selector: &Selector, base_url: &Url) -> Vec<Url> {
    let document = Html::parse_document(html);

    document
        .select(selector)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| resolve_article_url(href, base_url))
        .collect()
}
