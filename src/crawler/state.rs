//! Per-crawl mutable state
//!
//! One `CrawlState` is created by each crawl and never shared between crawls.

use std::collections::HashSet;

/// Emails found and URLs attempted during a single crawl
#[derive(Debug, Clone)]
pub struct CrawlState {
    /// Unique email addresses, exactly as found
    pub emails: HashSet<String>,

    /// Keys of every URL a fetch was attempted for
    visited: HashSet<String>,

    /// Visited keys in the order they were attempted
    visit_order: Vec<String>,

    /// Domain of the seed URL; only links on this domain are followed
    pub root_domain: String,

    /// Maximum number of hops from the seed
    pub max_depth: u32,
}

impl CrawlState {
    /// Creates empty state for a crawl rooted at `root_domain`
    pub fn new(root_domain: impl Into<String>, max_depth: u32) -> Self {
        Self {
            emails: HashSet::new(),
            visited: HashSet::new(),
            visit_order: Vec::new(),
            root_domain: root_domain.into(),
            max_depth,
        }
    }

    /// Returns true if a URL at `depth` with the given key should be fetched
    pub fn should_visit(&self, key: &str, depth: u32) -> bool {
        depth <= self.max_depth && !self.visited.contains(key)
    }

    /// Records a URL as attempted
    ///
    /// Returns false if it was already visited.
    pub fn mark_visited(&mut self, key: String) -> bool {
        if self.visited.insert(key.clone()) {
            self.visit_order.push(key);
            true
        } else {
            false
        }
    }

    /// Returns true if the key has been visited
    pub fn is_visited(&self, key: &str) -> bool {
        self.visited.contains(key)
    }

    /// Number of URLs attempted so far
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Consumes the state, returning emails and the ordered visit log
    pub fn into_parts(self) -> (HashSet<String>, Vec<String>) {
        (self.emails, self.visit_order)
    }
}
