use crate::crawler::FetchError;
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use url::Url;

/// Outcome of one crawl
#[derive(Debug, Clone)]
pub struct CrawlReport {
    /// The seed the crawl started from
    pub seed: Url,

    /// Maximum number of hops that was allowed
    pub max_depth: u32,

    /// Unique email addresses found across all pages
    pub emails: HashSet<String>,

    /// Every URL a fetch was attempted for, in visit order
    pub visited: Vec<String>,

    /// Pages that could not be fetched
    pub failures: Vec<FetchError>,

    /// Pages fetched and scanned successfully
    pub pages_fetched: usize,

    /// Links seen on scanned pages that point to another domain
    pub external_links: usize,

    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl CrawlReport {
    /// Emails in lexicographic order, for stable output
    pub fn sorted_emails(&self) -> Vec<&str> {
        let mut emails: Vec<&str> = self.emails.iter().map(String::as_str).collect();
        emails.sort_unstable();
        emails
    }

    /// Wall-clock time the crawl took
    pub fn duration(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }

    /// Percentage of attempted pages that were fetched successfully
    pub fn success_rate(&self) -> f64 {
        if self.visited.is_empty() {
            0.0
        } else {
            (self.pages_fetched as f64 / self.visited.len() as f64) * 100.0
        }
    }
}
