//! Output file names derived from article URLs and titles
//!
//! The PDF name must come out identical on every run for the same article,
//! since its existence is what marks the article as already downloaded.

use url::Url;

/// Raw text files are named after at most this many title characters
pub const MAX_TITLE_CHARS: usize = 50;

/// Store key of the rendered PDF for an article URL
///
/// Uses the last non-empty path segment, so `/a/b/slug` and `/a/b/slug/`
/// both map to `slug.pdf`. Query and fragment never take part. A URL with
/// no path segments maps to `index.pdf`.
///
/// # Examples
///
/// ```
/// use hbr_archiver::url::pdf_key;
/// use url::Url;
///
/// let url = Url::parse("https://hbr.org/2024/05/the-long-game?ab=1").unwrap();
/// assert_eq!(pdf_key(&url), "the-long-game.pdf");
/// ```
pub fn pdf_key(article_url: &Url) -> String {
    let segment = article_url
        .path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .unwrap_or("index");

    format!("{}.pdf", segment)
}

/// Store key of the raw text copy for an article title
///
/// Keeps the first [`MAX_TITLE_CHARS`] characters and replaces path
/// separators and control characters with `_`.
pub fn text_key(title: &str) -> String {
    let name: String = title
        .chars()
        .take(MAX_TITLE_CHARS)
        .map(|c| match c {
            '/' | '\\' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    format!("{}.txt", name)
}
