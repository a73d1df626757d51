//! Heading-to-outline computation.
//!
//! Everything here is pure: it takes heading records and returns anchors and
//! a nested tree, without touching any document.

mod anchor;
mod nesting;
mod types;

pub use anchor::{assign_anchor, assign_anchors, sanitize_explicit_id, slugify};
pub use nesting::{build_tree, nest, nesting_events, OutlineEvent};
pub use types::{HeadingRecord, Outline, OutlineEntry, OutlineNode};

/// Assign anchors to the headings and nest them into an outline
pub fn build_outline(records: &[HeadingRecord]) -> Outline {
    let anchors = assign_anchors(records);

    let entries: Vec<OutlineEntry> = records
        .iter()
        .zip(&anchors)
        .map(|(record, anchor)| OutlineEntry {
            level: record.level,
            anchor: anchor.clone(),
            text: record.text.clone(),
        })
        .collect();

    Outline {
        nodes: nest(&entries),
        anchors,
    }
}
