//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building HTTP clients with proper user agent strings and timeouts
//! - GET requests to fetch page content
//! - Error classification into `FetchError`
//!
//! There are no retries. A URL that fails is abandoned for the rest of the crawl.

use crate::config::UserAgentConfig;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Failure to fetch a single page
///
/// Every variant carries the URL that failed. None of them abort a crawl.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The server answered with a non-success status code
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// The request did not complete within the configured timeout
    #[error("Request timeout for {url}")]
    Timeout { url: String },

    /// The connection could not be established
    #[error("Connection failed for {url}: {message}")]
    Connect { url: String, message: String },

    /// Any other transport or body decoding failure
    #[error("Transport error for {url}: {message}")]
    Transport { url: String, message: String },
}

impl FetchError {
    /// The URL this error belongs to
    pub fn url(&self) -> &str {
        match self {
            Self::Status { url, .. }
            | Self::Timeout { url }
            | Self::Connect { url, .. }
            | Self::Transport { url, .. } => url,
        }
    }

    /// Classifies a reqwest error for the given URL
    fn from_reqwest(url: &Url, error: reqwest::Error) -> Self {
        let url = url.to_string();
        if error.is_timeout() {
            Self::Timeout { url }
        } else if error.is_connect() {
            Self::Connect {
                url,
                message: error.to_string(),
            }
        } else {
            Self::Transport {
                url,
                message: error.to_string(),
            }
        }
    }
}

/// A successfully fetched page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Page body content
    pub body: String,
}

/// Result of a fetch operation
pub type FetchResult = Result<FetchedPage, FetchError>;

/// Source of page bodies for the crawler
///
/// The HTTP implementation is `HttpFetcher`; tests drive the traversal with an
/// in-memory site instead.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches one page
    async fn fetch(&self, url: &Url) -> FetchResult;
}

/// Fetcher backed by a reqwest client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Wraps an existing client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a fetcher from user agent settings and a per-request timeout
    pub fn from_config(
        config: &UserAgentConfig,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self::new(build_http_client(config, timeout)?))
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> FetchResult {
        fetch_url(&self.client, url).await
    }
}

/// Formats the user agent string
///
/// Format: `CrawlerName/Version (+ContactURL; ContactEmail)`, where the
/// parenthesised part only lists the contact details that are configured.
pub fn user_agent_string(config: &UserAgentConfig) -> String {
    let base = format!("{}/{}", config.crawler_name, config.crawler_version);

    let contact: Vec<String> = config
        .contact_url
        .iter()
        .map(|u| format!("+{}", u))
        .chain(config.contact_email.iter().cloned())
        .collect();

    if contact.is_empty() {
        base
    } else {
        format!("{} ({})", base, contact.join("; "))
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The user agent configuration
/// * `timeout` - Timeout applied to each request
///
/// # Example
///
/// ```no_run
/// use mailrake::config::UserAgentConfig;
/// use mailrake::crawler::build_http_client;
/// use std::time::Duration;
///
/// let client = build_http_client(&UserAgentConfig::default(), Duration::from_secs(10)).unwrap();
/// ```
pub fn build_http_client(
    config: &UserAgentConfig,
    timeout: Duration,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent_string(config))
        .timeout(timeout)
        .connect_timeout(timeout)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and classifies the outcome
///
/// | Condition | Result |
/// |-----------|--------|
/// | 2xx | `Ok(FetchedPage)` |
/// | Any other status | `FetchError::Status` |
/// | Timeout | `FetchError::Timeout` |
/// | Connection refused / DNS / TLS | `FetchError::Connect` |
/// | Body read failure, other errors | `FetchError::Transport` |
///
/// Redirects are followed by the client. An empty 2xx body is a success.
pub async fn fetch_url(client: &Client, url: &Url) -> FetchResult {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| FetchError::from_reqwest(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| FetchError::from_reqwest(url, e))?;

    Ok(FetchedPage { body })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> UserAgentConfig {
        UserAgentConfig {
            crawler_name: "TestCrawler".to_string(),
            crawler_version: "1.0".to_string(),
            contact_url: Some("https://example.com/about".to_string()),
            contact_email: Some("admin@example.com".to_string()),
        }
    }

    #[test]
    fn test_build_http_client() {
        let client = build_http_client(&create_test_config(), Duration::from_secs(10));
        assert!(client.is_ok());
    }

    #[test]
    fn test_user_agent_format() {
        assert_eq!(
            user_agent_string(&create_test_config()),
            "TestCrawler/1.0 (+https://example.com/about; admin@example.com)"
        );
    }

    #[test]
    fn test_user_agent_without_contact() {
        let config = UserAgentConfig {
            contact_url: None,
            contact_email: None,
            ..create_test_config()
        };
        assert_eq!(user_agent_string(&config), "TestCrawler/1.0");
    }

    #[test]
    fn test_user_agent_email_only() {
        let config = UserAgentConfig {
            contact_url: None,
            ..create_test_config()
        };
        assert_eq!(
            user_agent_string(&config),
            "TestCrawler/1.0 (admin@example.com)"
        );
    }

    #[test]
    fn test_fetch_error_url() {
        let error = FetchError::Status {
            url: "https://example.com/missing".to_string(),
            status: 404,
        };
        assert_eq!(error.url(), "https://example.com/missing");
        assert_eq!(error.to_string(), "HTTP 404 for https://example.com/missing");
    }

    #[tokio::test]
    async fn test_connection_refused_is_reported() {
        // Bind then drop a listener to get a port nothing is serving on
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let client = build_http_client(&create_test_config(), Duration::from_secs(2)).unwrap();
        let url = Url::parse(&format!("http://127.0.0.1:{}/", port)).unwrap();

        let result = fetch_url(&client, &url).await;
        assert!(matches!(
            result,
            Err(FetchError::Connect { .. }) | Err(FetchError::Transport { .. })
        ));
    }
}
