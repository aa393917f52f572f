//! Crawler module for page fetching and email harvesting
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with a bounded timeout
//! - HTML parsing into visible text and links
//! - Depth-first traversal with a visited-set guard

mod fetcher;
mod harvester;
mod parser;
mod report;
mod state;

pub use fetcher::{
    build_http_client, fetch_url, user_agent_string, FetchError, FetchResult, FetchedPage,
    HttpFetcher, PageFetcher,
};
pub use harvester::{CrawlOptions, Harvester};
pub use parser::{extract_links, extract_text, parse_page, PageResult};
pub use report::CrawlReport;
pub use state::CrawlState;

use crate::config::Config;
use std::collections::HashSet;

/// Crawls a site and returns the unique email addresses found
///
/// This is the simplest entry point. It uses the default configuration with
/// the given depth, and never fails: an invalid seed or a failed seed fetch
/// is logged and produces an empty set.
///
/// # Arguments
///
/// * `seed` - Absolute URL of the first page
/// * `max_depth` - Hops to follow from the seed (0 = seed page only)
///
/// # Example
///
/// ```no_run
/// # async fn run() {
/// let emails = mailrake::crawl("https://example.com", 1).await;
/// for email in emails {
///     println!("{}", email);
/// }
/// # }
/// ```
pub async fn crawl(seed: &str, max_depth: u32) -> HashSet<String> {
    let mut config = Config::default();
    config.crawler.max_depth = max_depth;

    let harvester = match Harvester::new(&config) {
        Ok(harvester) => harvester,
        Err(e) => {
            tracing::error!("Failed to build HTTP client: {}", e);
            return HashSet::new();
        }
    };

    match harvester.harvest(seed).await {
        Ok(report) => report.emails,
        Err(e) => {
            tracing::warn!("Cannot crawl {}: {}", seed, e);
            HashSet::new()
        }
    }
}
