//! HTML parser for extracting page text and links
//!
//! This module turns fetched markup into a `PageResult`:
//! - The human-visible text, which is scanned for email addresses
//! - The `<a href>` targets, resolved to absolute URLs in document order

use crate::url::resolve_link;
use ego_tree::iter::Edge;
use scraper::{Html, Node, Selector};
use url::Url;

/// Elements whose text content is never shown to a reader
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "template"];

/// Elements that start a new line when rendered
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "fieldset",
    "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr",
    "li", "main", "nav", "ol", "option", "p", "pre", "section", "table", "td", "th", "title",
    "tr", "ul",
];

/// Extracted information from an HTML page
#[derive(Debug, Clone)]
pub struct PageResult {
    /// The raw markup as fetched
    pub html: String,

    /// Visible text, with a line break at each block-level boundary
    pub text: String,

    /// All resolvable links on the page (absolute URLs, document order)
    pub links: Vec<Url>,
}

/// Parses HTML content and extracts visible text and links
///
/// # Link Extraction Rules
///
/// - Only `<a href="...">` elements are considered
/// - Relative hrefs are resolved against `base_url`
/// - Hrefs that do not resolve to a URL with a host are skipped
///   (`mailto:`, `javascript:`, malformed values)
/// - Fragments are stripped; duplicates are kept
///
/// # Example
///
/// ```
/// use mailrake::crawler::parse_page;
/// use url::Url;
///
/// let html = r#"<html><body><p>Mail info@example.com</p><a href="/team">Team</a></body></html>"#;
/// let base_url = Url::parse("https://example.com/").unwrap();
/// let page = parse_page(html, &base_url);
/// assert_eq!(page.text, "Mail info@example.com\nTeam");
/// assert_eq!(page.links[0].as_str(), "https://example.com/team");
/// ```
pub fn parse_page(html: &str, base_url: &Url) -> PageResult {
    let document = Html::parse_document(html);

    PageResult {
        html: html.to_string(),
        text: extract_text(&document),
        links: extract_links(&document, base_url),
    }
}

/// Extracts all human-visible text from the document
///
/// Text nodes are concatenated as written, so inline markup inside a word
/// (`info<span>@</span>example.com`) does not split it. A line break is
/// inserted where a block-level element opens or closes. Text inside
/// `script`, `style` and `template` is ignored, as are comments and
/// attribute values. The result is trimmed at both ends.
pub fn extract_text(document: &Html) -> String {
    let mut text = String::new();
    let mut hidden_depth = 0usize;

    for edge in document.tree.root().traverse() {
        let (node, opening) = match edge {
            Edge::Open(node) => (node, true),
            Edge::Close(node) => (node, false),
        };

        match node.value() {
            Node::Element(element) => {
                let name = element.name();
                if HIDDEN_ELEMENTS.contains(&name) {
                    if opening {
                        hidden_depth += 1;
                    } else {
                        hidden_depth = hidden_depth.saturating_sub(1);
                    }
                } else if hidden_depth == 0
                    && BLOCK_ELEMENTS.contains(&name)
                    && !text.is_empty()
                    && !text.ends_with('\n')
                {
                    text.push('\n');
                }
            }
            Node::Text(fragment) if opening && hidden_depth == 0 => text.push_str(fragment),
            _ => {}
        }
    }

    text.trim().to_string()
}

/// Extracts every anchor target from the document, in document order
pub fn extract_links(document: &Html, base_url: &Url) -> Vec<Url> {
    let mut links = Vec::new();

    if let Ok(a_selector) = Selector::parse("a[href]") {
        for element in document.select(&a_selector) {
            if let Some(href) = element.value().attr("href") {
                match resolve_link(href, base_url) {
                    Some(absolute_url) => links.push(absolute_url),
                    None => tracing::trace!("Skipping unresolvable link: {}", href),
                }
            }
        }
    }

    links
}
