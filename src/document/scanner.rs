use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::config::TocConfig;
use crate::document::element::{strip_tags, ElementSpan, Tag};
use crate::outline::HeadingRecord;

lazy_static! {
    static ref WHITESPACE_REGEX: Regex = Regex::new(r"\s+").unwrap();
}

/// A heading found in the document, with the start tag it came from
#[derive(Debug, Clone)]
pub struct ScannedHeading {
    pub record: HeadingRecord,
    pub open: Tag,
}

/// Visible text of an HTML fragment: tags stripped, entities decoded,
/// whitespace runs collapsed and the ends trimmed.
pub fn visible_text(fragment: &str) -> String {
    let stripped = strip_tags(fragment);
    let decoded = html_escape::decode_html_entities(&stripped);
    WHITESPACE_REGEX.replace_all(decoded.trim(), " ").into_owned()
}

/// Identifier a heading already carries: `id`, or `name` when there is no `id`
pub fn explicit_id(tag: &Tag) -> Option<String> {
    ["id", "name"]
        .iter()
        .filter_map(|attr| tag.attribute_value(attr))
        .find(|value| !value.is_empty())
        .map(str::to_string)
}

/// Collect the headings of a document in document order.
///
/// Only headings inside `region` (the whole document when `None`) and within
/// the configured level range are kept. Headings inside `excluded`, which is
/// the TOC container itself, and headings with the no-toc class are skipped.
pub fn scan_headings(
    html: &str,
    tags: &[Tag],
    region: Option<&ElementSpan>,
    excluded: Option<&ElementSpan>,
    config: &TocConfig,
) -> Vec<ScannedHeading> {
    let (region_start, region_end) = match region {
        Some(span) => (span.content_start, span.content_end),
        None => (0, html.len()),
    };

    let mut headings = Vec::new();

    for (index, tag) in tags.iter().enumerate() {
        let Some(level) = tag.heading_level() else { continue };

        if tag.start < region_start || tag.start >= region_end {
            continue;
        }
        if !config.includes_level(level) {
            continue;
        }
        if excluded.map(|span| span.contains(tag.start)).unwrap_or(false) {
            debug!("Skipping h{} inside the TOC container at byte {}", level, tag.start);
            continue;
        }
        if tag.has_class(&config.no_toc_class) {
            debug!("Skipping h{} marked '{}' at byte {}", level, config.no_toc_class, tag.start);
            continue;
        }

        let text_end = tags[index + 1..]
            .iter()
            .find(|t| t.closing && t.name == tag.name)
            .map(|t| t.start)
            .unwrap_or(region_end)
            .min(region_end);

        let record = HeadingRecord {
            level,
            text: visible_text(&html[tag.end..text_end]),
            explicit_id: explicit_id(tag),
        };

        debug!("Found h{} '{}' (explicit id: {:?})", level, record.text, record.explicit_id);
        headings.push(ScannedHeading {
            record,
            open: tag.clone(),
        });
    }

    headings
}
