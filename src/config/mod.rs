//! Configuration module for Mailrake
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every key has a default, so a crawl can run without any file at all.
//!
//! # Example
//!
//! ```no_run
//! use mailrake::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("mailrake.toml")).unwrap();
//! println!("Crawler will use max depth: {}", config.crawler.max_depth);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlerConfig, OutputConfig, UserAgentConfig, DEFAULT_MAX_DEPTH,
    DEFAULT_REQUEST_TIMEOUT,
};

// Re-export parser functions
pub use parser::{load_config, parse_config};
pub use validation::validate;
