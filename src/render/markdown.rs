use crate::config::{ListStyle, TocConfig};
use crate::outline::{Outline, OutlineNode};
use crate::render::link_target;

fn append_node(md: &mut String, node: &OutlineNode, indent: usize, style: ListStyle, config: &TocConfig) {
    let marker = match style {
        ListStyle::Ordered => "1.",
        ListStyle::Unordered => "*",
    };
    let spaces = "  ".repeat(indent);
    let text = node.text.replace('[', "\\[").replace(']', "\\]");

    md.push_str(&format!(
        "{}{} [{}]({})\n",
        spaces,
        marker,
        text,
        link_target(&config.page_url, &node.anchor)
    ));

    // Numbered items need their children indented past "1. "
    let child_indent = match style {
        ListStyle::Ordered => indent + 2,
        ListStyle::Unordered => indent + 1,
    };
    for child in &node.children {
        append_node(md, child, child_indent, style, config);
    }
}

/// Render the outline as a nested Markdown list
pub fn render_markdown(outline: &Outline, style: ListStyle, config: &TocConfig) -> String {
    let mut md = String::new();

    for node in &outline.nodes {
        append_node(&mut md, node, 0, style, config);
    }

    md
}
