//! HBR Archiver main entry point
//!
//! This is the command-line interface for the article archiver.

use anyhow::Context;
use clap::Parser;
use hbr_archiver::config::{load_config_with_hash, validate, Config};
use hbr_archiver::crawler::run_crawl;
use hbr_archiver::output::{list_documents, print_listing, print_report, LogReporter};
use hbr_archiver::storage::FsStore;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// HBR Archiver: download paginated articles as PDFs
///
/// Walks the listing pages of a site, saves each linked article as raw text
/// and as a PDF, and bundles the PDFs into a zip archive. Articles whose PDF
/// already exists are skipped, so an interrupted run can simply be repeated.
#[derive(Parser, Debug)]
#[command(name = "hbr-archiver")]
#[command(version = "1.0.0")]
#[command(about = "Download paginated articles as PDFs", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults are used when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Site URL the listing pages hang off
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// First listing page to crawl
    #[arg(long, value_name = "N")]
    start_page: Option<u32>,

    /// Last listing page to crawl
    #[arg(long, value_name = "N")]
    end_page: Option<u32>,

    /// Maximum number of new articles to download (1-500)
    #[arg(long, value_name = "N")]
    max_articles: Option<u32>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate the configuration and show what would be crawled
    #[arg(long, conflicts_with = "list")]
    dry_run: bool,

    /// Show the PDFs downloaded so far and exit
    #[arg(long, conflicts_with = "dry_run")]
    list: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let (mut config, config_hash) = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            (config, Some(hash))
        }
        None => {
            tracing::debug!("No configuration file given, using defaults");
            (Config::default(), None)
        }
    };

    apply_overrides(&mut config, &cli);
    validate(&config).context("Invalid configuration")?;

    if cli.dry_run {
        handle_dry_run(&config);
    } else if cli.list {
        handle_list(&config)?;
    } else {
        handle_crawl(&config, config_hash).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("hbr_archiver=info,warn"),
            1 => EnvFilter::new("hbr_archiver=debug,info"),
            2 => EnvFilter::new("hbr_archiver=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Command-line values take precedence over the configuration file
fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(base_url) = &cli.base_url {
        config.crawl.base_url = base_url.clone();
    }
    if let Some(start_page) = cli.start_page {
        config.crawl.start_page = start_page;
    }
    if let Some(end_page) = cli.end_page {
        config.crawl.end_page = end_page;
    }
    if let Some(max_articles) = cli.max_articles {
        config.crawl.max_articles = max_articles;
    }
}

/// Handles the --dry-run mode: shows the resolved configuration
fn handle_dry_run(config: &Config) {
    println!("=== HBR Archiver Dry Run ===\n");

    println!("Crawl:");
    println!("  Base URL: {}", config.crawl.base_url);
    println!(
        "  Pages: {}-{}",
        config.crawl.start_page, config.crawl.end_page
    );
    println!("  Max articles: {}", config.crawl.max_articles);

    println!("\nSelectors:");
    println!("  Article link: {}", config.selectors.article_link);
    println!("  Body container: {}", config.selectors.body_container);
    println!("  Body fallback: {}", config.selectors.body_fallback);
    println!("  Title: {}", config.selectors.title);

    println!("\nHTTP:");
    println!("  User agent: {}", config.http.user_agent);
    println!("  Timeout: {}s", config.http.timeout_secs);
    println!("  Politeness delay: {}ms", config.http.politeness_delay_ms);

    println!("\nOutput:");
    println!("  Text: {}/", config.output.articles_dir);
    println!("  PDFs: {}/", config.output.pdfs_dir);
    println!("  Archive: {}", config.output.archive_path);

    println!("\n✓ Configuration is valid");
    if config.crawl.start_page > config.crawl.end_page {
        println!("! start-page is after end-page; nothing would be crawled");
    }
}

/// Handles the --list mode: shows the PDFs downloaded so far
fn handle_list(config: &Config) -> anyhow::Result<()> {
    let store = FsStore::open(&config.output.pdfs_dir);
    let documents = list_documents(&store)
        .with_context(|| format!("Failed to list {}", config.output.pdfs_dir))?;
    print_listing(&store.root().display().to_string(), &documents);
    Ok(())
}

/// Handles the main download operation
async fn handle_crawl(config: &Config, config_hash: Option<String>) -> anyhow::Result<()> {
    tracing::info!(
        "Starting download from {} (pages {}-{})",
        config.crawl.base_url,
        config.crawl.start_page,
        config.crawl.end_page
    );

    let mut report = run_crawl(config, &LogReporter)
        .await
        .context("Download failed")?;
    report.config_hash = config_hash;

    println!();
    print_report(&report);
    println!(
        "\nDownload completed! {} articles saved as PDFs in '{}' folder.",
        report.downloaded, config.output.pdfs_dir
    );

    Ok(())
}
