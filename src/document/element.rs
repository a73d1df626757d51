use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TAG_REGEX: Regex = Regex::new(
        r#"(?s)<!--.*?-->|<(/?)([A-Za-z][A-Za-z0-9-]*)((?:[^>"']|"[^"]*"|'[^']*')*)>"#
    ).unwrap();

    static ref ATTR_REGEX: Regex = Regex::new(
        r#"([^\s"'=<>/`]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#
    ).unwrap();
}

/// Elements that never have content or a closing tag
const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input",
    "link", "meta", "param", "source", "track", "wbr",
];

/// Elements whose content is raw text and must not be scanned for tags
const RAW_TEXT_ELEMENTS: [&str; 4] = ["script", "style", "textarea", "title"];

/// One attribute of a start tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Lowercased attribute name
    pub name: String,
    /// Entity-decoded value, `None` for a bare attribute
    pub value: Option<String>,
    /// Attribute exactly as written in the source
    pub raw: String,
}

/// A start or end tag located in the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    /// Lowercased element name
    pub name: String,
    pub closing: bool,
    pub self_closing: bool,
    /// Byte offset of `<`
    pub start: usize,
    /// Byte offset just past `>`
    pub end: usize,
    pub attributes: Vec<Attribute>,
}

impl Tag {
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Decoded value of an attribute, empty for a bare attribute
    pub fn attribute_value(&self, name: &str) -> Option<&str> {
        self.attribute(name).map(|a| a.value.as_deref().unwrap_or(""))
    }

    pub fn has_class(&self, class: &str) -> bool {
        !class.is_empty()
            && self
                .attribute_value("class")
                .map(|classes| classes.split_whitespace().any(|c| c == class))
                .unwrap_or(false)
    }

    /// Heading level for `h1`..`h6` start tags
    pub fn heading_level(&self) -> Option<u8> {
        if self.closing {
            return None;
        }
        let digit = self.name.strip_prefix('h')?;
        match digit.parse::<u8>() {
            Ok(level) if (1..=6).contains(&level) => Some(level),
            _ => None,
        }
    }

    pub fn is_void(&self) -> bool {
        self.self_closing || self.is_void_element()
    }

    /// Whether the element type itself never has content (`br`, `img`, ...)
    pub fn is_void_element(&self) -> bool {
        VOID_ELEMENTS.contains(&self.name.as_str())
    }

    /// Serialize the start tag back, keeping only the attributes accepted by `keep`
    pub fn render_with<F>(&self, mut keep: F) -> String
    where
        F: FnMut(&Attribute) -> bool,
    {
        let mut html = format!("<{}", self.name);
        for attribute in self.attributes.iter().filter(|a| keep(a)) {
            html.push(' ');
            html.push_str(&attribute.raw);
        }
        if self.self_closing {
            html.push_str(" /");
        }
        html.push('>');
        html
    }
}

/// Byte ranges of an element located by its start tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementSpan {
    pub open: Tag,
    pub content_start: usize,
    pub content_end: usize,
    /// Byte offset just past the end tag (or the end of the document)
    pub end: usize,
}

impl ElementSpan {
    pub fn start(&self) -> usize {
        self.open.start
    }

    /// Whether a byte offset falls anywhere inside the element, tags included
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start() && offset < self.end
    }
}

/// Remove every tag and comment from an HTML fragment.
///
/// Uses the same quote-aware pattern as the tokenizer, so a `>` inside a
/// quoted attribute value does not end the tag early.
pub fn strip_tags(fragment: &str) -> String {
    TAG_REGEX.replace_all(fragment, "").into_owned()
}

/// Parse the attribute section of a start tag
fn parse_attributes(raw: &str) -> Vec<Attribute> {
    ATTR_REGEX
        .captures_iter(raw)
        .map(|cap| {
            let value = cap
                .get(2)
                .or_else(|| cap.get(3))
                .or_else(|| cap.get(4))
                .map(|m| html_escape::decode_html_entities(m.as_str()).into_owned());
            Attribute {
                name: cap[1].to_lowercase(),
                value,
                raw: cap[0].to_string(),
            }
        })
        .collect()
}

/// Tokenize every start and end tag of a document, in order.
///
/// Comments are skipped, and the content of raw-text elements such as
/// `<script>` is not scanned, so markup inside string literals is ignored.
pub fn scan_tags(html: &str) -> Vec<Tag> {
    let mut tags = Vec::new();
    let mut position = 0;

    while let Some(cap) = TAG_REGEX.captures_at(html, position) {
        let whole = cap.get(0).map(|m| (m.start(), m.end())).unwrap_or((position, html.len()));
        position = whole.1;

        let Some(name) = cap.get(2) else {
            continue; // comment
        };

        let raw_attributes = cap.get(3).map(|m| m.as_str()).unwrap_or("");
        let tag = Tag {
            name: name.as_str().to_lowercase(),
            closing: !cap[1].is_empty(),
            self_closing: raw_attributes.trim_end().ends_with('/'),
            start: whole.0,
            end: whole.1,
            attributes: parse_attributes(raw_attributes),
        };

        if !tag.closing && !tag.self_closing && RAW_TEXT_ELEMENTS.contains(&tag.name.as_str()) {
            let close = format!("</{}", tag.name);
            let rest = &html[position..];
            position = match rest.to_ascii_lowercase().find(&close) {
                Some(offset) => position + offset,
                None => html.len(),
            };
        }

        tags.push(tag);
    }

    tags
}

/// Locate the element opened by `tags[index]`
pub fn element_at(html: &str, tags: &[Tag], index: usize) -> ElementSpan {
    let open = tags[index].clone();

    if open.is_void() {
        return ElementSpan {
            content_start: open.end,
            content_end: open.end,
            end: open.end,
            open,
        };
    }

    let mut depth = 0usize;
    for tag in &tags[index + 1..] {
        if tag.name != open.name {
            continue;
        }
        if tag.closing {
            if depth == 0 {
                return ElementSpan {
                    content_start: open.end,
                    content_end: tag.start,
                    end: tag.end,
                    open,
                };
            }
            depth -= 1;
        } else if !tag.self_closing {
            depth += 1;
        }
    }

    // Unclosed element: it runs to the end of the document
    ElementSpan {
        content_start: open.end,
        content_end: html.len(),
        end: html.len(),
        open,
    }
}

/// Find the first element carrying the given `id`
pub fn find_element_by_id(html: &str, tags: &[Tag], id: &str) -> Option<ElementSpan> {
    tags.iter()
        .position(|tag| !tag.closing && tag.attribute_value("id") == Some(id))
        .map(|index| element_at(html, tags, index))
}
