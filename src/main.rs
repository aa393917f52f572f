//! Mailrake main entry point
//!
//! This is the command-line interface for the Mailrake email harvester.

use anyhow::Context;
use clap::Parser;
use mailrake::config::{load_config, validate, Config};
use mailrake::output::{
    generate_markdown_summary, print_statistics, write_emails, CrawlStatistics,
};
use mailrake::Harvester;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Mailrake: a single-domain email harvester
///
/// Mailrake crawls a website from a seed URL, follows links on the same
/// domain up to a bounded depth, and prints every unique email address it
/// finds in page text.
#[derive(Parser, Debug)]
#[command(name = "mailrake")]
#[command(version)]
#[command(about = "A single-domain email harvester", long_about = None)]
struct Cli {
    /// Absolute URL of the page to start from
    #[arg(value_name = "SEED_URL")]
    seed: String,

    /// Hops to follow from the seed page (0 = seed page only)
    #[arg(short, long)]
    depth: Option<u32>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Treat URLs differing only in trailing slash or query order as one page
    #[arg(long)]
    normalize_urls: bool,

    /// Write a markdown summary of the crawl to this file
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,

    /// Print crawl statistics after the results
    #[arg(long)]
    stats: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = build_config(&cli)?;
    tracing::debug!("Effective configuration: {:?}", config);

    let harvester = Harvester::new(&config).context("Failed to build HTTP client")?;
    let report = harvester
        .harvest(&cli.seed)
        .await
        .with_context(|| format!("Cannot crawl {}", cli.seed))?;

    let stdout = std::io::stdout();
    write_emails(&report, &mut stdout.lock())?;

    if cli.stats {
        println!();
        print_statistics(&CrawlStatistics::from_report(&report));
    }

    let summary_path = cli
        .report
        .as_deref()
        .or(config.output.summary_path.as_deref().map(Path::new));
    if let Some(path) = summary_path {
        generate_markdown_summary(&report, path)
            .with_context(|| format!("Failed to write summary to {}", path.display()))?;
        tracing::info!("Summary written to {}", path.display());
    }

    Ok(())
}

/// Loads the configuration file (if any) and applies command-line overrides
fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?
        }
        None => Config::default(),
    };

    if let Some(depth) = cli.depth {
        config.crawler.max_depth = depth;
    }
    if let Some(timeout) = cli.timeout {
        config.crawler.request_timeout = timeout;
    }
    if cli.normalize_urls {
        config.crawler.normalize_urls = true;
    }

    validate(&config).context("Invalid configuration")?;
    Ok(config)
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("mailrake=info,warn"),
            1 => EnvFilter::new("mailrake=debug,info"),
            2 => EnvFilter::new("mailrake=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
