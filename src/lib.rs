//! Table-of-contents generation for rendered HTML pages.
//!
//! [`generate_toc`] scans a page's headings, gives each one an anchor,
//! nests them into an outline and writes the rendered list into the page's
//! TOC container. The outline computation itself lives in [`outline`] and
//! never touches a document.
//!
//! Known gap: running [`generate_toc`] twice on the same page inserts a
//! second marker before every heading. The headings no longer carry their
//! identifiers after the first pass, so the second pass falls back to
//! slugified text and the new markers may not match the old ones.

pub mod config;
pub mod document;
pub mod outline;
pub mod render;
pub mod utils;

use log::debug;
use serde::Serialize;

use config::{ListStyle, TocConfig};
use document::{ElementSpan, HtmlDocument, ScannedHeading};
use outline::{HeadingRecord, Outline};

pub use utils::error::{BoxResult, TocError};

/// What [`generate_toc`] wrote into a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableOfContents {
    pub outline: Outline,
    pub list_style: ListStyle,
    /// Markup placed inside the container
    pub html: String,
}

impl TableOfContents {
    /// Number of headings linked from the table of contents
    pub fn heading_count(&self) -> usize {
        self.outline.anchors.len()
    }
}

/// List style for a container: the configured one, else the container's
/// style attribute, else unordered.
pub fn resolve_list_style(container: &ElementSpan, config: &TocConfig) -> ListStyle {
    if let Some(style) = config.list_style {
        return style;
    }

    if config.style_attribute.is_empty() {
        return ListStyle::default();
    }

    container
        .open
        .attribute_value(&config.style_attribute.to_lowercase())
        .map(ListStyle::from_attribute)
        .unwrap_or_default()
}

/// Headings of a document that belong in its table of contents.
///
/// The container, when present, is excluded from the scan. A configured
/// content region that does not exist yields no headings.
fn collect_headings(
    html: &str,
    tags: &[document::Tag],
    container: Option<&ElementSpan>,
    config: &TocConfig,
) -> Vec<ScannedHeading> {
    let region = match config.content_id.as_deref() {
        Some(id) => match document::find_element_by_id(html, tags, id) {
            Some(region) => Some(region),
            None => {
                debug!("Content region '#{}' not found; no headings to list", id);
                return Vec::new();
            }
        },
        None => None,
    };

    document::scan_headings(html, tags, region.as_ref(), container, config)
}

/// Compute the outline of a document without modifying it
pub fn outline_document(document: &HtmlDocument, config: &TocConfig) -> Outline {
    let html = document.as_str();
    let tags = document.tags();
    let container = document::find_element_by_id(html, &tags, &config.container_id);

    let records: Vec<HeadingRecord> = collect_headings(html, &tags, container.as_ref(), config)
        .into_iter()
        .map(|heading| heading.record)
        .collect();

    outline::build_outline(&records)
}

/// Build the table of contents of a document and write it into the page.
///
/// Every listed heading gets an anchor marker inserted right before it and
/// loses its `id`/`name` attributes; the container's contents are replaced
/// with the rendered list and the container is made visible.
///
/// Returns `None`, leaving the document untouched, when the page has no
/// element with the configured container id.
pub fn generate_toc(document: &mut HtmlDocument, config: &TocConfig) -> Option<TableOfContents> {
    let tags = document.tags();
    let Some(container) = document::find_element_by_id(document.as_str(), &tags, &config.container_id) else {
        debug!("No '#{}' container; skipping table of contents", config.container_id);
        return None;
    };

    let headings = collect_headings(document.as_str(), &tags, Some(&container), config);
    let records: Vec<HeadingRecord> = headings.iter().map(|h| h.record.clone()).collect();
    let outline = outline::build_outline(&records);

    let list_style = resolve_list_style(&container, config);
    let html = render::render_html(&outline, list_style, config);

    let mut edits: Vec<document::Edit> = headings
        .iter()
        .zip(&outline.anchors)
        .map(|(heading, anchor)| document::heading_edit(&heading.open, anchor, config))
        .collect();
    edits.extend(document::container_edits(&container, &html));
    document.apply_edits(edits);

    debug!(
        "Table of contents built: {} headings, {} top-level entries, {} list",
        outline.anchors.len(),
        outline.nodes.len(),
        list_style
    );

    Some(TableOfContents {
        outline,
        list_style,
        html,
    })
}
