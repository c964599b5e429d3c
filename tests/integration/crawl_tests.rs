//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full download cycle end-to-end.

use hbr_archiver::config::Config;
use hbr_archiver::crawler::{run_crawl, CrawlController, Throttle};
use hbr_archiver::output::{NullReporter, ProgressReporter};
use hbr_archiver::storage::{ArtifactStore, MemoryStore, StoreError, StoreResult};
use hbr_archiver::ExportError;
use std::path::Path;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tempfile::TempDir;
use url::Url;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEST_USER_AGENT: &str = "hbr-archiver-tests/1.0";

/// Creates a test configuration writing into `out`
fn create_test_config(base_url: &str, out: &Path) -> Config {
    let mut config = Config::default();
    config.crawl.base_url = base_url.to_string();
    config.crawl.start_page = 1;
    config.crawl.end_page = 1;
    config.crawl.max_articles = 10;
    config.http.politeness_delay_ms = 0;
    config.output.articles_dir = out.join("hbr_articles").to_string_lossy().into_owned();
    config.output.pdfs_dir = out.join("hbr_pdfs").to_string_lossy().into_owned();
    config.output.archive_path = out
        .join("hbr_articles_collection.zip")
        .to_string_lossy()
        .into_owned();
    config
}

fn base_url(server: &MockServer) -> String {
    format!("{}/", server.uri())
}

/// Mounts a listing page with one `a.article-link` per href
async fn mount_listing(server: &MockServer, page: u32, hrefs: &[&str]) {
    let anchors: String = hrefs
        .iter()
        .map(|href| format!(r#"<li><a class="article-link" href="{}">Read</a></li>"#, href))
        .collect();

    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("page", page.to_string()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(format!(
                    r#"<html><body><a href="/about">About</a><ul>{}</ul></body></html>"#,
                    anchors
                ))
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

/// Mounts an article page and expects it to be requested `calls` times
async fn mount_article(server: &MockServer, route: &str, title: &str, body: &str, calls: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(format!(
                    r#"<html><head><title>Site</title></head><body>
                    <nav>Menu</nav>
                    <h1>{}</h1>
                    <article><script>track()</script><p>{}</p></article>
                    </body></html>"#,
                    title, body
                ))
                .insert_header("content-type", "text/html"),
        )
        .expect(calls)
        .mount(server)
        .await;
}

fn count_files(dir: &Path) -> usize {
    std::fs::read_dir(dir).map(|d| d.count()).unwrap_or(0)
}

fn zip_entries(path: &Path) -> Vec<String> {
    let mut archive =
        zip::ZipArchive::new(std::fs::File::open(path).expect("archive missing")).unwrap();
    (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect()
}

#[tokio::test]
async fn test_end_to_end_single_article() {
    let mock_server = MockServer::start().await;
    mount_listing(&mock_server, 1, &["/2024/01/example-article"]).await;

    Mock::given(method("GET"))
        .and(path("/2024/01/example-article"))
        .and(header("user-agent", TEST_USER_AGENT))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(
                    r#"<html><body><h1>Example</h1><article><p>Body text</p></article></body></html>"#,
                )
                .insert_header("content-type", "text/html"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let out = TempDir::new().unwrap();
    let mut config = create_test_config(&base_url(&mock_server), out.path());
    config.http.user_agent = TEST_USER_AGENT.to_string();

    let report = run_crawl(&config, &NullReporter).await.expect("Crawl failed");

    assert_eq!(report.downloaded, 1);
    assert_eq!(report.pages_crawled, 1);

    let pdf_path = out.path().join("hbr_pdfs").join("example-article.pdf");
    let pdf = std::fs::read(&pdf_path).expect("PDF missing");
    assert!(pdf.starts_with(b"%PDF"));

    let text = std::fs::read_to_string(out.path().join("hbr_articles").join("Example.txt"))
        .expect("Text copy missing");
    assert_eq!(text, "Body text");

    let archive_path = out.path().join("hbr_articles_collection.zip");
    assert_eq!(
        report.archive.as_ref().map(|(p, n)| (p.clone(), *n)),
        Some((archive_path.clone(), 1))
    );
    assert_eq!(zip_entries(&archive_path), vec!["example-article.pdf"]);
}

#[tokio::test]
async fn test_second_run_is_idempotent() {
    let mock_server = MockServer::start().await;
    mount_listing(&mock_server, 1, &["/a/first", "/a/second"]).await;
    mount_article(&mock_server, "/a/first", "First", "One", 1).await;
    mount_article(&mock_server, "/a/second", "Second", "Two", 1).await;

    let out = TempDir::new().unwrap();
    let config = create_test_config(&base_url(&mock_server), out.path());

    let first = run_crawl(&config, &NullReporter).await.unwrap();
    assert_eq!(first.downloaded, 2);

    let pdfs = out.path().join("hbr_pdfs");
    let articles = out.path().join("hbr_articles");
    let pdf_count = count_files(&pdfs);
    let text_count = count_files(&articles);

    let second = run_crawl(&config, &NullReporter).await.unwrap();
    assert_eq!(second.downloaded, 0);
    assert_eq!(second.already_downloaded, 2);
    assert!(second.archive.is_none());

    assert_eq!(count_files(&pdfs), pdf_count);
    assert_eq!(count_files(&articles), text_count);
}

#[tokio::test]
async fn test_existing_pdf_is_never_fetched() {
    let mock_server = MockServer::start().await;
    mount_listing(&mock_server, 1, &["/2023/07/already-here"]).await;
    mount_article(&mock_server, "/2023/07/already-here", "Old", "Old body", 0).await;

    let out = TempDir::new().unwrap();
    let pdfs = out.path().join("hbr_pdfs");
    std::fs::create_dir_all(&pdfs).unwrap();
    std::fs::write(pdfs.join("already-here.pdf"), b"%PDF-1.3 existing").unwrap();

    let config = create_test_config(&base_url(&mock_server), out.path());
    let report = run_crawl(&config, &NullReporter).await.unwrap();

    assert_eq!(report.downloaded, 0);
    assert_eq!(report.already_downloaded, 1);
    assert_eq!(count_files(&out.path().join("hbr_articles")), 0);
    assert_eq!(
        std::fs::read(pdfs.join("already-here.pdf")).unwrap(),
        b"%PDF-1.3 existing"
    );
}

#[tokio::test]
async fn test_failed_listing_page_does_not_stop_crawl() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;
    mount_listing(&mock_server, 2, &["/a/survivor"]).await;
    mount_article(&mock_server, "/a/survivor", "Survivor", "Still here", 1).await;

    let out = TempDir::new().unwrap();
    let mut config = create_test_config(&base_url(&mock_server), out.path());
    config.crawl.end_page = 2;

    let report = run_crawl(&config, &NullReporter).await.unwrap();

    assert_eq!(report.downloaded, 1);
    assert_eq!(report.pages_failed, 1);
    assert_eq!(report.pages_crawled, 1);
}

#[tokio::test]
async fn test_max_articles_bounds_downloads() {
    let mock_server = MockServer::start().await;
    mount_listing(&mock_server, 1, &["/a/one", "/a/two", "/a/three"]).await;
    mount_article(&mock_server, "/a/one", "One", "1", 1).await;
    mount_article(&mock_server, "/a/two", "Two", "2", 1).await;
    mount_article(&mock_server, "/a/three", "Three", "3", 0).await;

    let out = TempDir::new().unwrap();
    let mut config = create_test_config(&base_url(&mock_server), out.path());
    config.crawl.max_articles = 2;

    let report = run_crawl(&config, &NullReporter).await.unwrap();

    assert_eq!(report.downloaded, 2);
    assert!(out.path().join("hbr_pdfs").join("one.pdf").exists());
    assert!(out.path().join("hbr_pdfs").join("two.pdf").exists());
    assert!(!out.path().join("hbr_pdfs").join("three.pdf").exists());
}

#[tokio::test]
async fn test_full_session_skips_remaining_pages() {
    let mock_server = MockServer::start().await;
    mount_listing(&mock_server, 1, &["/a/only"]).await;
    mount_article(&mock_server, "/a/only", "Only", "Body", 1).await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let out = TempDir::new().unwrap();
    let mut config = create_test_config(&base_url(&mock_server), out.path());
    config.crawl.end_page = 3;
    config.crawl.max_articles = 1;

    let report = run_crawl(&config, &NullReporter).await.unwrap();
    assert_eq!(report.downloaded, 1);
    assert_eq!(report.pages_crawled, 1);
}

#[tokio::test]
async fn test_broken_articles_are_skipped() {
    let mock_server = MockServer::start().await;
    mount_listing(&mock_server, 1, &["/a/gone", "/a/no-body", "/a/good"]).await;

    Mock::given(method("GET"))
        .and(path("/a/gone"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/a/no-body"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><body><h1>Teaser</h1><div>No container</div></body></html>"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    mount_article(&mock_server, "/a/good", "Good", "Content", 1).await;

    let out = TempDir::new().unwrap();
    let config = create_test_config(&base_url(&mock_server), out.path());
    let report = run_crawl(&config, &NullReporter).await.unwrap();

    assert_eq!(report.downloaded, 1);
    assert_eq!(report.extract_failed, 2);
    assert_eq!(count_files(&out.path().join("hbr_pdfs")), 1);
}

#[tokio::test]
async fn test_empty_listing_is_not_an_error() {
    let mock_server = MockServer::start().await;
    mount_listing(&mock_server, 1, &[]).await;

    let out = TempDir::new().unwrap();
    let config = create_test_config(&base_url(&mock_server), out.path());
    let report = run_crawl(&config, &NullReporter).await.unwrap();

    assert_eq!(report.downloaded, 0);
    assert_eq!(report.pages_failed, 0);
    assert_eq!(report.pages_crawled, 1);
    assert!(report.archive.is_none());
    assert!(!out.path().join("hbr_articles_collection.zip").exists());
}

#[tokio::test]
async fn test_invalid_base_url_is_rejected_before_crawling() {
    let out = TempDir::new().unwrap();
    let config = create_test_config("ftp://example.org/", out.path());

    let result = run_crawl(&config, &NullReporter).await;
    assert!(matches!(result, Err(ExportError::Config(_))));
    assert!(!out.path().join("hbr_pdfs").exists());
}

/// Records the moment of every progress event
#[derive(Default)]
struct Recorder {
    events: Mutex<Vec<(u32, u32, Instant)>>,
}

impl ProgressReporter for Recorder {
    fn progress(&self, downloaded: u32, max_articles: u32) {
        self.events
            .lock()
            .unwrap()
            .push((downloaded, max_articles, Instant::now()));
    }
}

#[tokio::test]
async fn test_politeness_delay_between_downloads() {
    let mock_server = MockServer::start().await;
    mount_listing(&mock_server, 1, &["/a/one", "/a/two", "/a/three"]).await;
    mount_article(&mock_server, "/a/one", "One", "1", 1).await;
    mount_article(&mock_server, "/a/two", "Two", "2", 1).await;
    mount_article(&mock_server, "/a/three", "Three", "3", 1).await;

    let out = TempDir::new().unwrap();
    let config = create_test_config(&base_url(&mock_server), out.path());
    let base = Url::parse(&base_url(&mock_server)).unwrap();

    let delay = Duration::from_millis(300);
    let mut controller = CrawlController::new(&config, MemoryStore::new(), MemoryStore::new())
        .unwrap()
        .with_throttle(Throttle::new(delay));

    let recorder = Recorder::default();
    let report = controller.run(&base, 1, 1, 10, &recorder).await;
    assert_eq!(report.downloaded, 3);

    let events = recorder.events.lock().unwrap();
    assert_eq!(
        events.iter().map(|(d, m, _)| (*d, *m)).collect::<Vec<_>>(),
        vec![(1, 10), (2, 10), (3, 10)]
    );

    let first = events.first().unwrap().2;
    let last = events.last().unwrap().2;
    assert!(last.duration_since(first) >= delay * 2);
}

/// A store that refuses every write
struct ReadOnlyStore;

impl ArtifactStore for ReadOnlyStore {
    fn exists(&self, _key: &str) -> bool {
        false
    }

    fn put(&mut self, _key: &str, _bytes: &[u8]) -> StoreResult<()> {
        Err(StoreError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only",
        )))
    }

    fn get(&self, key: &str) -> StoreResult<Vec<u8>> {
        Err(StoreError::NotFound(key.to_string()))
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        Ok(Vec::new())
    }
}

#[tokio::test]
async fn test_render_failure_does_not_count() {
    let mock_server = MockServer::start().await;
    mount_listing(&mock_server, 1, &["/a/one"]).await;
    mount_article(&mock_server, "/a/one", "One", "Body", 1).await;

    let out = TempDir::new().unwrap();
    let config = create_test_config(&base_url(&mock_server), out.path());
    let base = Url::parse(&base_url(&mock_server)).unwrap();

    let articles: Box<dyn ArtifactStore> = Box::new(MemoryStore::new());
    let pdfs: Box<dyn ArtifactStore> = Box::new(ReadOnlyStore);
    let mut controller = CrawlController::new(&config, articles, pdfs)
        .unwrap()
        .with_throttle(Throttle::none());

    let report = controller.run(&base, 1, 1, 10, &NullReporter).await;

    assert_eq!(report.downloaded, 0);
    assert_eq!(report.render_failed, 1);
    // The text copy was written but no PDF exists, so a later run retries
    assert!(controller.articles().exists("One.txt"));
    assert!(!controller.pdfs().exists("one.pdf"));
}

#[tokio::test]
async fn test_blank_heading_article_is_skipped() {
    let mock_server = MockServer::start().await;
    mount_listing(&mock_server, 1, &["/a/blank-heading"]).await;
    mount_article(&mock_server, "/a/blank-heading", "   ", "Body without a title", 1).await;

    let out = TempDir::new().unwrap();
    let config = create_test_config(&base_url(&mock_server), out.path());
    let report = run_crawl(&config, &NullReporter).await.unwrap();

    assert_eq!(report.downloaded, 0);
    assert_eq!(report.extract_failed, 1);
    assert_eq!(count_files(&out.path().join("hbr_pdfs")), 0);
    assert_eq!(count_files(&out.path().join("hbr_articles")), 0);
}

#[tokio::test]
async fn test_dot_named_slug_is_archived() {
    let mock_server = MockServer::start().await;
    mount_listing(&mock_server, 1, &["/a/.hidden-piece", "/a/plain-piece"]).await;
    mount_article(&mock_server, "/a/.hidden-piece", "Hidden", "One", 1).await;
    mount_article(&mock_server, "/a/plain-piece", "Plain", "Two", 1).await;

    let out = TempDir::new().unwrap();
    let config = create_test_config(&base_url(&mock_server), out.path());
    let report = run_crawl(&config, &NullReporter).await.unwrap();

    assert_eq!(report.downloaded, 2);
    assert!(out.path().join("hbr_pdfs").join(".hidden-piece.pdf").exists());

    let archive_path = out.path().join("hbr_articles_collection.zip");
    assert_eq!(
        zip_entries(&archive_path),
        vec![".hidden-piece.pdf", "plain-piece.pdf"]
    );
}
