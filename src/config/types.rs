use serde::Deserialize;

/// Browser-like identification sent with every request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Main configuration structure for the archiver
///
/// Every table is optional; missing tables fall back to the defaults the
/// tool ships with.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawl: CrawlConfig,
    pub selectors: SelectorConfig,
    pub http: HttpConfig,
    pub output: OutputConfig,
}

/// What to crawl and how much of it
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlConfig {
    /// Site URL the listing pages hang off
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// First listing page (inclusive)
    #[serde(rename = "start-page")]
    pub start_page: u32,

    /// Last listing page (inclusive)
    #[serde(rename = "end-page")]
    pub end_page: u32,

    /// Stop after this many new articles
    #[serde(rename = "max-articles")]
    pub max_articles: u32,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            base_url: "https://hbr.org/".to_string(),
            start_page: 1,
            end_page: 10,
            max_articles: 500,
        }
    }
}

/// Site-specific CSS selectors
///
/// These are heuristics for one site layout and usually need adjusting
/// when pointing the tool somewhere else.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Anchors on a listing page that point at articles
    #[serde(rename = "article-link")]
    pub article_link: String,

    /// Primary article body container
    #[serde(rename = "body-container")]
    pub body_container: String,

    /// Used when the primary container is absent
    #[serde(rename = "body-fallback")]
    pub body_fallback: String,

    /// Article title element
    pub title: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            article_link: "a.article-link".to_string(),
            body_container: "div.article-body".to_string(),
            body_fallback: "article".to_string(),
            title: "h1".to_string(),
        }
    }
}

/// HTTP client behaviour
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Whole-request timeout in seconds
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Pause after every successful download (milliseconds)
    #[serde(rename = "politeness-delay-ms")]
    pub politeness_delay_ms: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 30,
            politeness_delay_ms: 2000,
        }
    }
}

/// Output locations
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Raw text copies, one `.txt` per article
    #[serde(rename = "articles-dir")]
    pub articles_dir: String,

    /// Rendered PDFs, one per article; doubles as the dedup index
    #[serde(rename = "pdfs-dir")]
    pub pdfs_dir: String,

    /// Zip bundle of the PDF directory
    #[serde(rename = "archive-path")]
    pub archive_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            articles_dir: "hbr_articles".to_string(),
            pdfs_dir: "hbr_pdfs".to_string(),
            archive_path: "hbr_articles_collection.zip".to_string(),
        }
    }
}
