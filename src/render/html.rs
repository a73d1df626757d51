use crate::config::{ListStyle, TocConfig};
use crate::outline::{Outline, OutlineNode};
use crate::render::link_target;

fn class_attribute(class: &str) -> String {
    if class.is_empty() {
        String::new()
    } else {
        format!(" class=\"{}\"", html_escape::encode_double_quoted_attribute(class))
    }
}

/// Render one item and its children
fn render_node(html: &mut String, node: &OutlineNode, style: ListStyle, config: &TocConfig) {
    let href = link_target(&config.page_url, &node.anchor);
    html.push_str(&format!(
        "<li{}><a href=\"{}\">{}</a>",
        class_attribute(&config.item_class),
        html_escape::encode_double_quoted_attribute(&href),
        html_escape::encode_text(&node.text)
    ));

    if !node.children.is_empty() {
        html.push_str(&format!("\n<{}{}>\n", style.tag(), class_attribute(&config.sublist_class)));
        for child in &node.children {
            render_node(html, child, style, config);
        }
        html.push_str(&format!("</{}>\n", style.tag()));
    }

    html.push_str("</li>\n");
}

/// Render the outline as nested HTML lists.
///
/// An outline without headings still yields an (empty) list element.
pub fn render_html(outline: &Outline, style: ListStyle, config: &TocConfig) -> String {
    let mut html = format!("<{}{}>\n", style.tag(), class_attribute(&config.list_class));

    for node in &outline.nodes {
        render_node(&mut html, node, style, config);
    }

    html.push_str(&format!("</{}>", style.tag()));
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::{build_outline, HeadingRecord};

    fn outline(levels: &[u8]) -> Outline {
        let records: Vec<_> = levels
            .iter()
            .enumerate()
            .map(|(i, &level)| HeadingRecord::new(level, format!("Section {}", i)))
            .collect();
        build_outline(&records)
    }

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn test_single_heading() {
        let html = render_html(&outline(&[2]), ListStyle::Unordered, &TocConfig::default());
        assert_eq!(
            html,
            "<ul class=\"toc\">\n<li><a href=\"#section-0\">Section 0</a></li>\n</ul>"
        );
    }

    #[test]
    fn test_group_then_sibling() {
        let html = render_html(&outline(&[2, 3, 3, 2]), ListStyle::Unordered, &TocConfig::default());
        let expected = concat!(
            "<ul class=\"toc\">\n",
            "<li><a href=\"#section-0\">Section 0</a>\n",
            "<ul>\n",
            "<li><a href=\"#section-1\">Section 1</a></li>\n",
            "<li><a href=\"#section-2\">Section 2</a></li>\n",
            "</ul>\n",
            "</li>\n",
            "<li><a href=\"#section-3\">Section 3</a></li>\n",
            "</ul>"
        );
        assert_eq!(html, expected);
    }

    #[test]
    fn test_start_below_top_level() {
        let html = render_html(&outline(&[4]), ListStyle::Ordered, &TocConfig::default());
        assert_eq!(count(&html, "<ol"), 1);
        assert_eq!(count(&html, "</ol>"), 1);
    }

    #[test]
    fn test_balanced_tags() {
        for levels in [&[2, 6, 3, 5, 4][..], &[3, 2, 4, 2][..], &[6, 5, 4, 3, 2][..]] {
            let html = render_html(&outline(levels), ListStyle::Unordered, &TocConfig::default());
            assert_eq!(count(&html, "<ul"), count(&html, "</ul>"), "{}", html);
            assert_eq!(count(&html, "<li"), count(&html, "</li>"), "{}", html);
            assert_eq!(count(&html, "<li"), levels.len());
        }
    }

    #[test]
    fn test_empty_outline_renders_empty_list() {
        let html = render_html(&Outline::default(), ListStyle::Unordered, &TocConfig::default());
        assert_eq!(html, "<ul class=\"toc\">\n</ul>");
    }

    #[test]
    fn test_classes_page_url_and_escaping() {
        let config = TocConfig {
            list_class: String::new(),
            sublist_class: "toc__sublist".to_string(),
            item_class: "toc__item".to_string(),
            ..TocConfig::default()
        }
        .with_page_url("/guide/index.html");

        let records = vec![
            HeadingRecord::new(2, "Fish & <Chips>"),
            HeadingRecord::new(3, "Sides"),
        ];
        let html = render_html(&build_outline(&records), ListStyle::Unordered, &config);

        assert!(html.starts_with("<ul>\n"));
        assert!(html.contains("<li class=\"toc__item\"><a href=\"/guide/index.html#fish--chips\">Fish &amp; &lt;Chips&gt;</a>"));
        assert!(html.contains("<ul class=\"toc__sublist\">"));
    }
}
