/// Default id of the element that receives the table of contents
pub fn default_container_id() -> String {
    "toc".to_string()
}

/// Default content region (none: the whole document is scanned)
pub fn default_content_id() -> Option<String> {
    None
}

/// Default shallowest heading level considered
pub fn default_min_level() -> u8 {
    2
}

/// Default deepest heading level considered
pub fn default_max_level() -> u8 {
    6
}

/// Default page location prefixed to every link
pub fn default_page_url() -> String {
    "".to_string()
}

/// Default data attribute selecting ordered lists on the container
pub fn default_style_attribute() -> String {
    "data-ordered".to_string()
}

/// Default class of the outermost list
pub fn default_list_class() -> String {
    "toc".to_string()
}

/// Default class of the anchor markers inserted before headings
pub fn default_marker_class() -> String {
    "toc-anchor".to_string()
}

/// Default class that keeps a heading out of the table of contents
pub fn default_no_toc_class() -> String {
    "no_toc".to_string()
}
