use url::Url;

/// Resolves a link href against the page it appears on
///
/// Returns None if the href does not resolve to an absolute URL with a host.
/// That covers malformed hrefs as well as `mailto:`, `tel:`, `javascript:` and
/// `data:` targets. The fragment is stripped, since it never reaches the server.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use mailrake::url::resolve_link;
///
/// let base = Url::parse("https://example.com/team/").unwrap();
/// let link = resolve_link("../contact#form", &base).unwrap();
/// assert_eq!(link.as_str(), "https://example.com/contact");
/// ```
pub fn resolve_link(href: &str, base_url: &Url) -> Option<Url> {
    let href = href.trim();

    let mut absolute_url = base_url.join(href).ok()?;

    if absolute_url.host_str().map_or(true, str::is_empty) {
        return None;
    }

    absolute_url.set_fragment(None);
    Some(absolute_url)
}
