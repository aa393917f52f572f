//! Output module for presenting crawl results
//!
//! This module handles:
//! - Printing found emails one per line
//! - Computing and printing crawl statistics
//! - Generating a markdown summary of a crawl

mod markdown;
pub mod stats;

pub use markdown::{format_markdown_summary, generate_markdown_summary};
pub use stats::{print_statistics, CrawlStatistics};

use crate::crawler::CrawlReport;
use std::io::Write;
use thiserror::Error;

/// Output-specific errors
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Writes the found emails, sorted, one per line under a header
pub fn write_emails<W: Write>(report: &CrawlReport, out: &mut W) -> OutputResult<()> {
    writeln!(out, "Found emails:")?;
    for email in report.sorted_emails() {
        writeln!(out, "{}", email)?;
    }
    Ok(())
}
