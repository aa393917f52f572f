//! Email pattern matching
//!
//! Matching is purely syntactic: a local part, `@`, a dotted domain and an
//! alphabetic top-level label of at least two characters, bounded by word
//! boundaries on both sides. No DNS or mailbox verification takes place.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// The email pattern used to scan page text
pub const EMAIL_PATTERN: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b";

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

/// Returns every email-like token in `text`, in the order they appear
///
/// Matches are returned exactly as written in the text; duplicates are kept.
///
/// # Examples
///
/// ```
/// use mailrake::email::find_emails;
///
/// let found = find_emails("Write to sales@example.com or support@example.org.");
/// assert_eq!(found, vec!["sales@example.com", "support@example.org"]);
/// ```
pub fn find_emails(text: &str) -> Vec<&str> {
    EMAIL_REGEX.find_iter(text).map(|m| m.as_str()).collect()
}

/// Scans `text` and inserts every match into `emails`
///
/// Returns the number of addresses that were not already present.
pub fn collect_emails(text: &str, emails: &mut HashSet<String>) -> usize {
    let mut added = 0;
    for email in find_emails(text) {
        if emails.insert(email.to_string()) {
            added += 1;
        }
    }
    added
}
