use lazy_static::lazy_static;
use regex::Regex;

use crate::config::TocConfig;
use crate::document::element::{Attribute, ElementSpan, Tag};
use crate::document::Edit;

lazy_static! {
    static ref DISPLAY_NONE_REGEX: Regex = Regex::new(
        r"(?i)display\s*:\s*none\s*(?:!important)?\s*;?"
    ).unwrap();
}

/// Zero-width element carrying an anchor, placed right before a heading
pub fn marker_html(anchor: &str, config: &TocConfig) -> String {
    let id = html_escape::encode_double_quoted_attribute(anchor);
    if config.marker_class.is_empty() {
        format!("<a id=\"{}\"></a>", id)
    } else {
        format!(
            "<a id=\"{}\" class=\"{}\"></a>",
            id,
            html_escape::encode_double_quoted_attribute(&config.marker_class)
        )
    }
}

fn is_identifier(attribute: &Attribute) -> bool {
    attribute.name == "id" || attribute.name == "name"
}

/// Replace a heading's start tag with its marker followed by the tag stripped
/// of `id` and `name`, which now live on the marker.
pub fn heading_edit(open: &Tag, anchor: &str, config: &TocConfig) -> Edit {
    let mut replacement = marker_html(anchor, config);
    replacement.push_str(&open.render_with(|a| !is_identifier(a)));

    Edit {
        start: open.start,
        end: open.end,
        replacement,
    }
}

/// Start tag of the container with `hidden` and `display: none` removed
fn visible_start_tag(open: &Tag) -> String {
    let mut html = format!("<{}", open.name);

    for attribute in &open.attributes {
        match attribute.name.as_str() {
            "hidden" => continue,
            "style" => {
                let style = attribute.value.as_deref().unwrap_or("");
                let cleaned = DISPLAY_NONE_REGEX.replace_all(style, "");
                let cleaned = cleaned.trim();
                if cleaned.is_empty() {
                    continue;
                }
                if cleaned.len() == style.trim().len() {
                    html.push(' ');
                    html.push_str(&attribute.raw);
                } else {
                    html.push_str(&format!(
                        " style=\"{}\"",
                        html_escape::encode_double_quoted_attribute(cleaned)
                    ));
                }
            }
            _ => {
                html.push(' ');
                html.push_str(&attribute.raw);
            }
        }
    }

    html.push('>');
    html
}

/// Replace the container's contents with the rendered list and make it visible.
///
/// A self-closing container (`<div id="toc"/>`) becomes an explicit
/// open/close pair around the list.
pub fn container_edits(container: &ElementSpan, rendered: &str) -> Vec<Edit> {
    let open = &container.open;
    let mut content = rendered.to_string();
    if open.self_closing && !open.is_void_element() {
        content.push_str(&format!("</{}>", open.name));
    }

    vec![
        Edit {
            start: container.open.start,
            end: container.open.end,
            replacement: visible_start_tag(&container.open),
        },
        Edit {
            start: container.content_start,
            end: container.content_end,
            replacement: content,
        },
    ]
}
