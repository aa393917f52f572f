use url::Url;

/// Computes the key a URL occupies in the visited set
///
/// The fragment is always dropped. Without `normalize`, the rest of the URL is
/// kept verbatim, so `/page` and `/page/` are distinct entries. With
/// `normalize`, the key is made insensitive to:
///
/// - a trailing slash on a non-root path
/// - repeated slashes inside the path
/// - the order of query parameters
/// - an empty query string (trailing `?`)
///
/// # Examples
///
/// ```
/// use url::Url;
/// use mailrake::url::visit_key;
///
/// let url = Url::parse("https://example.com/team/?b=2&a=1#top").unwrap();
/// assert_eq!(visit_key(&url, false), "https://example.com/team/?b=2&a=1");
/// assert_eq!(visit_key(&url, true), "https://example.com/team?a=1&b=2");
/// ```
pub fn visit_key(url: &Url, normalize: bool) -> String {
    let mut url = url.clone();
    url.set_fragment(None);

    if !normalize {
        return url.to_string();
    }

    let normalized_path = normalize_path(url.path());
    url.set_path(&normalized_path);

    if url.query().is_some() {
        let params = sorted_query_params(&url);
        if params.is_empty() {
            url.set_query(None);
        } else {
            url.query_pairs_mut().clear().extend_pairs(params);
        }
    }

    url.to_string()
}

/// Collapses empty segments and removes a trailing slash (except for root)
fn normalize_path(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    if segments.is_empty() {
        return "/".to_string();
    }

    format!("/{}", segments.join("/"))
}

/// Returns the query parameters sorted by key, then value
fn sorted_query_params(url: &Url) -> Vec<(String, String)> {
    let mut params: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    params.sort();
    params
}
