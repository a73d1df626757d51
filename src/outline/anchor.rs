use lazy_static::lazy_static;
use regex::Regex;

use crate::outline::types::HeadingRecord;

lazy_static! {
    static ref WHITESPACE_REGEX: Regex = Regex::new(r"\s+").unwrap();
    static ref NON_SLUG_REGEX: Regex = Regex::new(r"[^A-Za-z0-9-]").unwrap();
}

/// Turn heading text into an anchor-safe token.
///
/// Whitespace runs become a single hyphen, anything outside `[A-Za-z0-9-]`
/// is dropped and the result is lowercased. Non-ASCII letters are dropped
/// too, so a heading written entirely in another script yields an empty slug.
pub fn slugify(text: &str) -> String {
    let hyphenated = WHITESPACE_REGEX.replace_all(text, "-");
    NON_SLUG_REGEX.replace_all(&hyphenated, "").to_lowercase()
}

/// Remove double quotes from an explicit identifier
pub fn sanitize_explicit_id(id: &str) -> String {
    id.replace('"', "")
}

/// Pick the anchor for a heading: its explicit identifier when it has a
/// non-empty one, its slugified text otherwise.
///
/// Anchors are not deduplicated; two headings with the same text share an
/// anchor and the browser decides which one a link lands on.
pub fn assign_anchor(record: &HeadingRecord) -> String {
    match record.explicit_id.as_deref() {
        Some(id) if !id.is_empty() => sanitize_explicit_id(id),
        _ => slugify(&record.text),
    }
}

/// Assign anchors to a whole heading sequence, keeping document order
pub fn assign_anchors(records: &[HeadingRecord]) -> Vec<String> {
    records.iter().map(assign_anchor).collect()
}
