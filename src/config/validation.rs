use crate::config::types::{Config, CrawlConfig, HttpConfig, OutputConfig, SelectorConfig};
use crate::url::validate_base_url;
use crate::{ConfigError, ConfigResult};
use scraper::Selector;

/// Upper bound on articles per run
pub const MAX_ARTICLES_LIMIT: u32 = 500;

/// Validates the entire configuration
pub fn validate(config: &Config) -> ConfigResult<()> {
    validate_crawl_config(&config.crawl)?;
    validate_selector_config(&config.selectors)?;
    validate_http_config(&config.http)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Compiles a CSS selector, reporting the offending text on failure
pub fn parse_selector(selector: &str) -> ConfigResult<Selector> {
    Selector::parse(selector).map_err(|e| ConfigError::InvalidSelector {
        selector: selector.to_string(),
        message: format!("{:?}", e),
    })
}

/// Validates the crawl inputs
///
/// `start_page > end_page` is accepted; it simply crawls nothing.
fn validate_crawl_config(config: &CrawlConfig) -> ConfigResult<()> {
    validate_base_url(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url: {}", e)))?;

    if config.start_page < 1 {
        return Err(ConfigError::Validation(format!(
            "start-page must be >= 1, got {}",
            config.start_page
        )));
    }

    if config.end_page < 1 {
        return Err(ConfigError::Validation(format!(
            "end-page must be >= 1, got {}",
            config.end_page
        )));
    }

    if config.max_articles < 1 || config.max_articles > MAX_ARTICLES_LIMIT {
        return Err(ConfigError::Validation(format!(
            "max-articles must be between 1 and {}, got {}",
            MAX_ARTICLES_LIMIT, config.max_articles
        )));
    }

    Ok(())
}

fn validate_selector_config(config: &SelectorConfig) -> ConfigResult<()> {
    for selector in [
        &config.article_link,
        &config.body_container,
        &config.body_fallback,
        &config.title,
    ] {
        if selector.trim().is_empty() {
            return Err(ConfigError::Validation(
                "selectors cannot be empty".to_string(),
            ));
        }
        parse_selector(selector)?;
    }
    Ok(())
}

fn validate_http_config(config: &HttpConfig) -> ConfigResult<()> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    Ok(())
}

fn validate_output_config(config: &OutputConfig) -> ConfigResult<()> {
    if config.articles_dir.is_empty() {
        return Err(ConfigError::Validation(
            "articles-dir cannot be empty".to_string(),
        ));
    }

    if config.pdfs_dir.is_empty() {
        return Err(ConfigError::Validation(
            "pdfs-dir cannot be empty".to_string(),
        ));
    }

    if config.archive_path.is_empty() {
        return Err(ConfigError::Validation(
            "archive-path cannot be empty".to_string(),
        ));
    }

    Ok(())
}
