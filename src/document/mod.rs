//! HTML document handling: locating elements, scanning headings and
//! splicing markers and the rendered list back into the source.

mod element;
mod markers;
mod scanner;

pub use element::{element_at, find_element_by_id, scan_tags, Attribute, ElementSpan, Tag};
pub use markers::{container_edits, heading_edit, marker_html};
pub use scanner::{explicit_id, scan_headings, visible_text, ScannedHeading};

use log::debug;

/// Replacement of a byte range of the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub start: usize,
    pub end: usize,
    pub replacement: String,
}

/// An HTML page held in memory while it is annotated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlDocument {
    source: String,
}

impl HtmlDocument {
    pub fn new(source: impl Into<String>) -> Self {
        Self { source: source.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn into_string(self) -> String {
        self.source
    }

    /// Tokenize the document's tags
    pub fn tags(&self) -> Vec<Tag> {
        scan_tags(&self.source)
    }

    pub fn find_element_by_id(&self, id: &str) -> Option<ElementSpan> {
        find_element_by_id(&self.source, &self.tags(), id)
    }

    /// Apply non-overlapping edits in one pass.
    ///
    /// Edits are applied back to front so earlier offsets stay valid.
    pub fn apply_edits(&mut self, mut edits: Vec<Edit>) {
        edits.sort_by(|a, b| b.start.cmp(&a.start).then(b.end.cmp(&a.end)));

        let mut applied = 0;
        let mut limit = self.source.len();
        for edit in edits {
            if edit.end > limit || edit.start > edit.end {
                debug!("Dropping overlapping edit at {}..{}", edit.start, edit.end);
                continue;
            }
            self.source.replace_range(edit.start..edit.end, &edit.replacement);
            limit = edit.start;
            applied += 1;
        }

        debug!("Applied {} document edits", applied);
    }
}

impl From<String> for HtmlDocument {
    fn from(source: String) -> Self {
        Self::new(source)
    }
}

impl From<&str> for HtmlDocument {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}
