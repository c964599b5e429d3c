//! Configuration module for the archiver
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use hbr_archiver::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("archiver.toml")).unwrap();
//! println!("Crawling pages {}..={}", config.crawl.start_page, config.crawl.end_page);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlConfig, HttpConfig, OutputConfig, SelectorConfig, DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{config_fingerprint, load_config, load_config_with_hash, parse_config};
pub use validation::{parse_selector, validate, MAX_ARTICLES_LIMIT};
