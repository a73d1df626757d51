use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use rustyll_toc::config::{ListStyle, TocConfig};
use rustyll_toc::render::OutputFormat;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "rustyll-toc")]
#[command(about = "Table-of-contents generator for rendered HTML pages", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory searched for _toc.yml / _toc.toml / _toc.json (defaults to ./)
    #[arg(short, long, value_name = "DIR", global = true)]
    pub source: Option<PathBuf>,

    /// Custom configuration file (may be repeated; later files win)
    #[arg(short, long, value_name = "CONFIG_FILE", global = true)]
    pub config: Option<Vec<PathBuf>>,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false, global = true)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false, global = true)]
    pub debug: bool,
}

/// Options overriding the configuration file
#[derive(Args, Debug, Clone, Default)]
pub struct TocArgs {
    /// Render a numbered list
    #[arg(long, default_value_t = false, conflicts_with = "unordered")]
    pub ordered: bool,

    /// Render a bulleted list
    #[arg(long, default_value_t = false)]
    pub unordered: bool,

    /// Id of the element receiving the table of contents
    #[arg(long, value_name = "ID")]
    pub container: Option<String>,

    /// Id of the element whose headings are listed
    #[arg(long, value_name = "ID")]
    pub content: Option<String>,

    /// Page location placed in front of every #anchor
    #[arg(long, value_name = "URL")]
    pub page_url: Option<String>,

    /// Shallowest heading level listed
    #[arg(long, value_name = "LEVEL")]
    pub min_level: Option<u8>,

    /// Deepest heading level listed
    #[arg(long, value_name = "LEVEL")]
    pub max_level: Option<u8>,
}

impl TocArgs {
    /// Apply command-line overrides on top of a loaded configuration
    pub fn apply(&self, config: &mut TocConfig) {
        if self.ordered {
            config.list_style = Some(ListStyle::Ordered);
        } else if self.unordered {
            config.list_style = Some(ListStyle::Unordered);
        }

        if let Some(container) = &self.container {
            config.container_id = container.clone();
        }
        if let Some(content) = &self.content {
            config.content_id = Some(content.clone());
        }
        if let Some(page_url) = &self.page_url {
            config.page_url = page_url.clone();
        }
        if let Some(level) = self.min_level {
            config.min_level = level;
        }
        if let Some(level) = self.max_level {
            config.max_level = level;
        }
    }
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Write the table of contents into one page or every page of a directory
    #[command(alias = "r")]
    Render {
        /// HTML file or directory of HTML files
        path: PathBuf,

        /// Output file or directory (defaults to rewriting the input in place)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        #[command(flatten)]
        toc: TocArgs,

        /// Print verbose output
        #[arg(short = 'V', long, default_value_t = false)]
        verbose: bool,

        /// Silence output
        #[arg(short, long, default_value_t = false)]
        quiet: bool,
    },

    /// Print the outline of a page without modifying it
    #[command(alias = "o")]
    Outline {
        /// HTML file to read
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_name = "FORMAT", value_enum, default_value_t = OutputFormat::Markdown)]
        format: OutputFormat,

        #[command(flatten)]
        toc: TocArgs,
    },

    /// Print the anchor each text would receive
    Slug {
        /// Heading texts
        #[arg(required = true)]
        text: Vec<String>,
    },
}
