//! Article outcome definitions
//!
//! Every article link the crawl loop looks at ends in exactly one of these.

use std::fmt;

/// Represents how processing of one article link ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArticleOutcome {
    // ===== Success =====
    /// Text and PDF were both written
    Downloaded,

    // ===== Skips =====
    /// A PDF for this URL already exists; nothing was fetched
    AlreadyDownloaded,

    /// The page was fetched but title or body came out empty
    EmptyContent,

    // ===== Soft failures =====
    /// Fetch failed, non-2xx status, or no body container
    ExtractFailed,

    /// Writing the raw text copy failed
    WriteFailed,

    /// PDF generation or the PDF write failed
    RenderFailed,
}

impl ArticleOutcome {
    /// Returns true if this counts towards the download total
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Downloaded)
    }

    /// Returns true if the article was skipped without an error
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::AlreadyDownloaded | Self::EmptyContent)
    }

    /// Returns true if this represents a soft failure
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Self::ExtractFailed | Self::WriteFailed | Self::RenderFailed
        )
    }

    /// Short machine-friendly label
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Downloaded => "downloaded",
            Self::AlreadyDownloaded => "already_downloaded",
            Self::EmptyContent => "empty_content",
            Self::ExtractFailed => "extract_failed",
            Self::WriteFailed => "write_failed",
            Self::RenderFailed => "render_failed",
        }
    }
}

impl fmt::Display for ArticleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_category() {
        for outcome in [
            ArticleOutcome::Downloaded,
            ArticleOutcome::AlreadyDownloaded,
            ArticleOutcome::EmptyContent,
            ArticleOutcome::ExtractFailed,
            ArticleOutcome::WriteFailed,
            ArticleOutcome::RenderFailed,
        ] {
            let categories = [outcome.is_success(), outcome.is_skipped(), outcome.is_error()];
            assert_eq!(
                categories.iter().filter(|c| **c).count(),
                1,
                "{:?} must belong to exactly one category",
                outcome
            );
        }
    }

    #[test]
    fn test_is_success() {
        assert!(ArticleOutcome::Downloaded.is_success());
        assert!(!ArticleOutcome::AlreadyDownloaded.is_success());
        assert!(!ArticleOutcome::RenderFailed.is_success());
    }

    #[test]
    fn test_display() {
        assert_eq!(ArticleOutcome::Downloaded.to_string(), "downloaded");
        assert_eq!(
            ArticleOutcome::AlreadyDownloaded.to_string(),
            "already_downloaded"
        );
    }
}
