//! Crawl statistics
//!
//! Summary numbers derived from a `CrawlReport`, for the `--stats` output.

use crate::crawler::{CrawlReport, FetchError};

/// Crawl statistics summary
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrawlStatistics {
    /// URLs a fetch was attempted for
    pub pages_visited: usize,

    /// Pages fetched and scanned
    pub pages_fetched: usize,

    /// Pages answered with a non-success status
    pub http_errors: usize,

    /// Pages that timed out
    pub timeouts: usize,

    /// Pages that could not be reached or read
    pub network_errors: usize,

    /// Cross-domain links that were seen and not followed
    pub external_links: usize,

    /// Unique email addresses found
    pub unique_emails: usize,

    /// Wall-clock duration in milliseconds
    pub duration_ms: i64,
}

impl CrawlStatistics {
    /// Computes statistics for a finished crawl
    pub fn from_report(report: &CrawlReport) -> Self {
        let mut stats = Self {
            pages_visited: report.visited.len(),
            pages_fetched: report.pages_fetched,
            external_links: report.external_links,
            unique_emails: report.emails.len(),
            duration_ms: report.duration().num_milliseconds(),
            ..Self::default()
        };

        for failure in &report.failures {
            match failure {
                FetchError::Status { .. } => stats.http_errors += 1,
                FetchError::Timeout { .. } => stats.timeouts += 1,
                FetchError::Connect { .. } | FetchError::Transport { .. } => {
                    stats.network_errors += 1
                }
            }
        }

        stats
    }

    /// Total number of failed fetches
    pub fn total_errors(&self) -> usize {
        self.http_errors + self.timeouts + self.network_errors
    }
}

/// Prints statistics to stdout
pub fn print_statistics(stats: &CrawlStatistics) {
    println!("=== Crawl Statistics ===\n");
    println!("Pages visited:   {}", stats.pages_visited);
    println!("Pages fetched:   {}", stats.pages_fetched);
    println!("Failed fetches:  {}", stats.total_errors());
    if stats.total_errors() > 0 {
        println!("  HTTP errors:    {}", stats.http_errors);
        println!("  Timeouts:       {}", stats.timeouts);
        println!("  Network errors: {}", stats.network_errors);
    }
    println!("External links:  {}", stats.external_links);
    println!("Unique emails:   {}", stats.unique_emails);
    println!("Duration:        {:.2}s", stats.duration_ms as f64 / 1000.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use url::Url;

    #[test]
    fn test_from_report_counts_failures_by_kind() {
        let started_at = Utc::now();
        let report = CrawlReport {
            seed: Url::parse("https://example.com/").unwrap(),
            max_depth: 1,
            emails: ["a@example.com".to_string()].into_iter().collect(),
            visited: (0..5).map(|i| format!("https://example.com/{}", i)).collect(),
            failures: vec![
                FetchError::Status {
                    url: "https://example.com/1".to_string(),
                    status: 500,
                },
                FetchError::Timeout {
                    url: "https://example.com/2".to_string(),
                },
                FetchError::Connect {
                    url: "https://example.com/3".to_string(),
                    message: "refused".to_string(),
                },
            ],
            pages_fetched: 2,
            external_links: 4,
            started_at,
            finished_at: started_at + chrono::Duration::milliseconds(1500),
        };

        let stats = CrawlStatistics::from_report(&report);

        assert_eq!(stats.pages_visited, 5);
        assert_eq!(stats.pages_fetched, 2);
        assert_eq!(stats.http_errors, 1);
        assert_eq!(stats.timeouts, 1);
        assert_eq!(stats.network_errors, 1);
        assert_eq!(stats.total_errors(), 3);
        assert_eq!(stats.external_links, 4);
        assert_eq!(stats.unique_emails, 1);
        assert_eq!(stats.duration_ms, 1500);
    }
}
