use serde::{Serialize, Deserialize};
use std::fmt;
use std::str::FromStr;

use crate::config::defaults;

/// List markup used for the table of contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
    Ordered,
    #[default]
    Unordered,
}

impl ListStyle {
    /// HTML element name for lists of this style
    pub fn tag(&self) -> &'static str {
        match self {
            ListStyle::Ordered => "ol",
            ListStyle::Unordered => "ul",
        }
    }

    /// Interpret a boolean-like attribute value (`data-ordered="true"`).
    ///
    /// A bare attribute counts as set; `false`, `0`, `no` and `off` do not.
    pub fn from_attribute(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "false" | "0" | "no" | "off" | "unordered" => ListStyle::Unordered,
            _ => ListStyle::Ordered,
        }
    }
}

impl fmt::Display for ListStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListStyle::Ordered => write!(f, "ordered"),
            ListStyle::Unordered => write!(f, "unordered"),
        }
    }
}

impl FromStr for ListStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ordered" | "ol" => Ok(ListStyle::Ordered),
            "unordered" | "ul" | "bulleted" => Ok(ListStyle::Unordered),
            other => Err(format!("Unknown list style: {}", other)),
        }
    }
}

/// Table-of-contents configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TocConfig {
    /// Id of the element whose contents are replaced by the list
    #[serde(default = "defaults::default_container_id")]
    pub container_id: String,

    /// Id of the element whose headings are listed (whole document when unset)
    #[serde(default = "defaults::default_content_id")]
    pub content_id: Option<String>,

    /// Explicit list style; falls back to the container's style attribute
    #[serde(default)]
    pub list_style: Option<ListStyle>,

    /// Data attribute on the container read when `list_style` is unset
    #[serde(default = "defaults::default_style_attribute")]
    pub style_attribute: String,

    /// Shallowest heading level listed
    #[serde(default = "defaults::default_min_level")]
    pub min_level: u8,

    /// Deepest heading level listed
    #[serde(default = "defaults::default_max_level")]
    pub max_level: u8,

    /// Page location used in front of `#anchor` in every link
    #[serde(default = "defaults::default_page_url")]
    pub page_url: String,

    /// Class of the outermost list (omitted when empty)
    #[serde(default = "defaults::default_list_class")]
    pub list_class: String,

    /// Class of nested lists (omitted when empty)
    #[serde(default)]
    pub sublist_class: String,

    /// Class of every list item (omitted when empty)
    #[serde(default)]
    pub item_class: String,

    /// Class of the anchor markers inserted before headings
    #[serde(default = "defaults::default_marker_class")]
    pub marker_class: String,

    /// Headings with this class are left out
    #[serde(default = "defaults::default_no_toc_class")]
    pub no_toc_class: String,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            container_id: defaults::default_container_id(),
            content_id: defaults::default_content_id(),
            list_style: None,
            style_attribute: defaults::default_style_attribute(),
            min_level: defaults::default_min_level(),
            max_level: defaults::default_max_level(),
            page_url: defaults::default_page_url(),
            list_class: defaults::default_list_class(),
            sublist_class: String::new(),
            item_class: String::new(),
            marker_class: defaults::default_marker_class(),
            no_toc_class: defaults::default_no_toc_class(),
        }
    }
}

impl TocConfig {
    /// Whether a heading level is inside the configured range
    pub fn includes_level(&self, level: u8) -> bool {
        level >= self.min_level && level <= self.max_level
    }

    pub fn with_list_style(mut self, style: ListStyle) -> Self {
        self.list_style = Some(style);
        self
    }

    pub fn with_content_id(mut self, id: impl Into<String>) -> Self {
        self.content_id = Some(id.into());
        self
    }

    pub fn with_page_url(mut self, url: impl Into<String>) -> Self {
        self.page_url = url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TocConfig::default();
        assert_eq!(config.container_id, "toc");
        assert!(config.includes_level(2));
        assert!(config.includes_level(6));
        assert!(!config.includes_level(1));
        assert_eq!(config.list_style, None);
    }

    #[test]
    fn test_list_style_from_attribute() {
        assert_eq!(ListStyle::from_attribute("true"), ListStyle::Ordered);
        assert_eq!(ListStyle::from_attribute(""), ListStyle::Ordered);
        assert_eq!(ListStyle::from_attribute("1"), ListStyle::Ordered);
        assert_eq!(ListStyle::from_attribute("False"), ListStyle::Unordered);
        assert_eq!(ListStyle::from_attribute("0"), ListStyle::Unordered);
    }

    #[test]
    fn test_list_style_parse_and_tag() {
        assert_eq!("ol".parse::<ListStyle>().unwrap().tag(), "ol");
        assert_eq!("Unordered".parse::<ListStyle>().unwrap().tag(), "ul");
        assert!("table".parse::<ListStyle>().is_err());
    }

    #[test]
    fn test_deserialize_partial_yaml() {
        let config: TocConfig = serde_yaml::from_str("list_style: ordered\nmax_level: 3\n").unwrap();
        assert_eq!(config.list_style, Some(ListStyle::Ordered));
        assert_eq!(config.max_level, 3);
        assert_eq!(config.min_level, 2);
        assert_eq!(config.marker_class, "toc-anchor");
    }
}
