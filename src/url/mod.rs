//! URL handling module for Mailrake
//!
//! This module provides seed parsing, link resolution, domain extraction for the
//! same-domain filter, and the keys used by the visited set.

mod domain;
mod normalize;
mod resolve;

use crate::{UrlError, UrlResult};
use url::Url;

// Re-export main functions
pub use domain::{extract_domain, same_domain};
pub use normalize::visit_key;
pub use resolve::resolve_link;

/// Parses a seed URL, requiring an absolute HTTP(S) URL with a host
///
/// # Examples
///
/// ```
/// use mailrake::url::parse_seed;
///
/// assert!(parse_seed("https://example.com/").is_ok());
/// assert!(parse_seed("/relative/path").is_err());
/// assert!(parse_seed("ftp://example.com/").is_err());
/// ```
pub fn parse_seed(seed: &str) -> UrlResult<Url> {
    let url = Url::parse(seed.trim()).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(UrlError::MissingDomain);
    }

    Ok(url)
}
