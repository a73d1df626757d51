use log::debug;
use std::path::PathBuf;

use rustyll_toc::config::TocConfig;
use rustyll_toc::document::HtmlDocument;
use rustyll_toc::render::{self, OutputFormat};
use rustyll_toc::utils::fs;
use rustyll_toc::{outline_document, resolve_list_style, BoxResult};

use crate::cli::commands::load_effective_config;
use crate::cli::types::Commands;

/// Handle the outline command
pub fn handle_outline_command(
    command: &Commands,
    source: Option<&PathBuf>,
    config_files: Option<&Vec<PathBuf>>,
) -> BoxResult<()> {
    let Commands::Outline { file, format, toc } = command else {
        return Ok(());
    };

    let config = load_effective_config(source, config_files, toc)?;

    let document = HtmlDocument::new(fs::read_file(file)?);
    println!("{}", outline_to_string(&document, *format, &config)?);

    Ok(())
}

/// Render the outline of a document in the given format
pub fn outline_to_string(document: &HtmlDocument, format: OutputFormat, config: &TocConfig) -> BoxResult<String> {
    let outline = outline_document(document, config);
    debug!("Outline has {} entries, depth {}", outline.len(), outline.depth());

    let style = document
        .find_element_by_id(&config.container_id)
        .map(|container| resolve_list_style(&container, config))
        .unwrap_or_else(|| config.list_style.unwrap_or_default());

    render::render(&outline, format, style, config)
}
