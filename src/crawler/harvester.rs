//! Depth-first harvesting of one site
//!
//! The traversal keeps an explicit stack of `(url, depth)` pairs. Children are
//! pushed in reverse document order, so pages are visited in the same order a
//! recursive depth-first walk would visit them, without growing the call stack.

use crate::config::Config;
use crate::crawler::fetcher::{HttpFetcher, PageFetcher};
use crate::crawler::parser::parse_page;
use crate::crawler::report::CrawlReport;
use crate::crawler::state::CrawlState;
use crate::email::collect_emails;
use crate::url::{extract_domain, parse_seed, same_domain, visit_key};
use crate::{HarvestError, UrlError};
use chrono::Utc;
use std::time::Duration;
use url::Url;

/// Traversal settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrawlOptions {
    /// Maximum number of hops from the seed (0 = seed page only)
    pub max_depth: u32,

    /// Collapse equivalent URLs before checking the visited set
    pub normalize_urls: bool,
}

impl Default for CrawlOptions {
    fn default() -> Self {
        Self {
            max_depth: crate::config::DEFAULT_MAX_DEPTH,
            normalize_urls: false,
        }
    }
}

impl From<&Config> for CrawlOptions {
    fn from(config: &Config) -> Self {
        Self {
            max_depth: config.crawler.max_depth,
            normalize_urls: config.crawler.normalize_urls,
        }
    }
}

/// Crawls a site and collects email addresses
pub struct Harvester<F = HttpFetcher> {
    fetcher: F,
    options: CrawlOptions,
}

impl Harvester<HttpFetcher> {
    /// Creates a harvester that fetches over HTTP using the given configuration
    pub fn new(config: &Config) -> Result<Self, HarvestError> {
        let timeout = Duration::from_secs(config.crawler.request_timeout);
        let fetcher = HttpFetcher::from_config(&config.user_agent, timeout)?;
        Ok(Self::with_fetcher(fetcher, CrawlOptions::from(config)))
    }
}

impl<F: PageFetcher> Harvester<F> {
    /// Creates a harvester around any page fetcher
    pub fn with_fetcher(fetcher: F, options: CrawlOptions) -> Self {
        Self { fetcher, options }
    }

    /// Crawls from `seed` and returns the full report
    ///
    /// Only an invalid seed is an error. Fetch failures are logged, recorded in
    /// the report, and end only the branch they occur on.
    pub async fn harvest(&self, seed: &str) -> crate::Result<CrawlReport> {
        let mut seed_url = parse_seed(seed)?;
        seed_url.set_fragment(None);

        let root_domain = extract_domain(&seed_url).ok_or(UrlError::MissingDomain)?;
        let max_depth = self.options.max_depth;
        let normalize = self.options.normalize_urls;

        tracing::info!(
            "Starting crawl of {} (max depth {}, domain {})",
            seed_url,
            max_depth,
            root_domain
        );

        let started_at = Utc::now();
        let mut state = CrawlState::new(root_domain, max_depth);
        let mut failures = Vec::new();
        let mut pages_fetched = 0;
        let mut external_links = 0;

        let mut stack: Vec<(Url, u32)> = vec![(seed_url.clone(), 0)];

        while let Some((url, depth)) = stack.pop() {
            let key = visit_key(&url, normalize);
            if !state.should_visit(&key, depth) {
                continue;
            }

            // Marked before the fetch so a failing URL is never retried
            state.mark_visited(key);

            tracing::debug!("Fetching [depth {}]: {}", depth, url);
            let page = match self.fetcher.fetch(&url).await {
                Ok(page) => page,
                Err(e) => {
                    tracing::warn!("Error scraping {}: {}", url, e);
                    failures.push(e);
                    continue;
                }
            };
            pages_fetched += 1;

            let parsed = parse_page(&page.body, &url);
            let added = collect_emails(&parsed.text, &mut state.emails);
            if added > 0 {
                tracing::debug!("Found {} new email(s) on {}", added, url);
            }

            if depth >= max_depth {
                continue;
            }

            let mut children = Vec::with_capacity(parsed.links.len());
            for link in parsed.links {
                if same_domain(&link, &seed_url) {
                    children.push(link);
                } else {
                    tracing::trace!("Not following cross-domain link: {}", link);
                    external_links += 1;
                }
            }

            for link in children.into_iter().rev() {
                stack.push((link, depth + 1));
            }
        }

        let (emails, visited) = state.into_parts();

        tracing::info!(
            "Crawl finished: {} page(s) visited, {} failed, {} unique email(s)",
            visited.len(),
            failures.len(),
            emails.len()
        );

        Ok(CrawlReport {
            seed: seed_url,
            max_depth,
            emails,
            visited,
            failures,
            pages_fetched,
            external_links,
            started_at,
            finished_at: Utc::now(),
        })
    }
}
