//! Renderers turning an outline into list markup.

mod html;
mod markdown;

pub use html::render_html;
pub use markdown::render_markdown;

use clap::ValueEnum;
use std::fmt;

use crate::config::{ListStyle, TocConfig};
use crate::outline::Outline;
use crate::utils::error::{BoxResult, TocError};

/// Output formats for a rendered outline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Nested HTML lists
    #[default]
    Html,
    /// Nested Markdown list
    #[value(alias = "md")]
    Markdown,
    /// Outline tree as JSON
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Link to an anchor on the page at `page_url` (same page when empty)
pub fn link_target(page_url: &str, anchor: &str) -> String {
    format!("{}#{}", page_url, anchor)
}

/// Render an outline in the requested format
pub fn render(outline: &Outline, format: OutputFormat, style: ListStyle, config: &TocConfig) -> BoxResult<String> {
    match format {
        OutputFormat::Html => Ok(render_html(outline, style, config)),
        OutputFormat::Markdown => Ok(render_markdown(outline, style, config)),
        OutputFormat::Json => serde_json::to_string_pretty(outline)
            .map_err(|e| TocError::Render(format!("Failed to serialize outline: {}", e)).into()),
    }
}
