//! Markdown summary generation
//!
//! This module generates a human-readable markdown summary of a crawl,
//! including statistics, the emails found, and the pages that failed.

use crate::crawler::CrawlReport;
use crate::output::stats::CrawlStatistics;
use crate::output::OutputResult;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes a markdown summary of the crawl to `output_path`
pub fn generate_markdown_summary(report: &CrawlReport, output_path: &Path) -> OutputResult<()> {
    let markdown = format_markdown_summary(report);

    let mut file = File::create(output_path)?;
    file.write_all(markdown.as_bytes())?;

    Ok(())
}

/// Formats a crawl report as markdown
pub fn format_markdown_summary(report: &CrawlReport) -> String {
    let stats = CrawlStatistics::from_report(report);
    let mut md = String::new();

    md.push_str("# Mailrake Crawl Summary\n\n");

    md.push_str("## Run Information\n\n");
    md.push_str(&format!("- **Seed**: {}\n", report.seed));
    md.push_str(&format!("- **Max Depth**: {}\n", report.max_depth));
    md.push_str(&format!(
        "- **Started**: {}\n",
        report.started_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    md.push_str(&format!(
        "- **Finished**: {}\n",
        report.finished_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    md.push_str(&format!(
        "- **Duration**: {:.2} seconds\n\n",
        stats.duration_ms as f64 / 1000.0
    ));

    md.push_str("## Statistics\n\n");
    md.push_str("| Metric | Count |\n");
    md.push_str("|--------|-------|\n");
    md.push_str(&format!("| Pages Visited | {} |\n", stats.pages_visited));
    md.push_str(&format!("| Pages Fetched | {} |\n", stats.pages_fetched));
    md.push_str(&format!("| HTTP Errors | {} |\n", stats.http_errors));
    md.push_str(&format!("| Timeouts | {} |\n", stats.timeouts));
    md.push_str(&format!("| Network Errors | {} |\n", stats.network_errors));
    md.push_str(&format!("| External Links | {} |\n", stats.external_links));
    md.push_str(&format!("| Unique Emails | {} |\n", stats.unique_emails));
    md.push_str(&format!(
        "\n- **Success Rate**: {:.2}%\n\n",
        report.success_rate()
    ));

    md.push_str("## Emails Found\n\n");
    if report.emails.is_empty() {
        md.push_str("_No email addresses found._\n\n");
    } else {
        for email in report.sorted_emails() {
            md.push_str(&format!("- {}\n", email));
        }
        md.push('\n');
    }

    if !report.failures.is_empty() {
        md.push_str("## Failed Pages\n\n");
        for failure in &report.failures {
            md.push_str(&format!("- {}\n", failure));
        }
        md.push('\n');
    }

    md.push_str("---\n\n");
    md.push_str("*Generated by Mailrake*\n");

    md
}
