use log::{debug, error, info, LevelFilter};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

use rustyll_toc::config::TocConfig;
use rustyll_toc::document::HtmlDocument;
use rustyll_toc::utils::fs;
use rustyll_toc::{generate_toc, BoxResult, TocError};

use crate::cli::commands::load_effective_config;
use crate::cli::logging::set_log_level;
use crate::cli::types::Commands;

/// Totals for one render run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RenderSummary {
    /// HTML files read
    pub processed: usize,
    /// Files that had a TOC container and received a table of contents
    pub with_toc: usize,
    /// Headings linked across all files
    pub headings: usize,
    /// Files that could not be processed
    pub failed: usize,
}

/// Handle the render command
pub fn handle_render_command(
    command: &Commands,
    source: Option<&PathBuf>,
    config_files: Option<&Vec<PathBuf>>,
) -> BoxResult<()> {
    let Commands::Render { path, output, toc, verbose, quiet } = command else {
        return Ok(());
    };

    if *verbose {
        set_log_level(LevelFilter::Debug);
    } else if *quiet {
        set_log_level(LevelFilter::Error);
    }

    let config = load_effective_config(source, config_files, toc)?;

    info!("Rendering table of contents for {}", path.display());
    let summary = render_path(path, output.as_deref(), &config)?;

    info!(
        "Processed {} file(s): {} with a table of contents, {} heading(s) linked",
        summary.processed, summary.with_toc, summary.headings
    );

    if summary.failed > 0 {
        return Err(TocError::Document(format!("{} file(s) could not be processed", summary.failed)).into());
    }

    Ok(())
}

/// Render one file, or every HTML file below a directory.
///
/// Directory output mirrors the input tree; without an output path files
/// are rewritten in place. Files are independent, so they are processed in
/// parallel.
pub fn render_path(path: &Path, output: Option<&Path>, config: &TocConfig) -> BoxResult<RenderSummary> {
    if path.is_file() {
        let destination = output.unwrap_or(path);
        let headings = render_file(path, destination, config)?;
        return Ok(RenderSummary {
            processed: 1,
            with_toc: usize::from(headings.is_some()),
            headings: headings.unwrap_or(0),
            failed: 0,
        });
    }

    if !path.is_dir() {
        return Err(TocError::Document(format!("Path does not exist: {}", path.display())).into());
    }

    if let Some(out) = output {
        if out.is_file() {
            return Err(TocError::Document(format!(
                "Output must be a directory when rendering a directory: {}", out.display()
            )).into());
        }
    }

    let files = fs::list_html_files(path);
    debug!("Found {} HTML file(s) under {}", files.len(), path.display());

    let results: Vec<Result<Option<usize>, String>> = files
        .par_iter()
        .map(|file| {
            let destination = match (output, file.strip_prefix(path)) {
                (Some(out), Ok(relative)) => out.join(relative),
                _ => file.clone(),
            };
            render_file(file, &destination, config).map_err(|e| format!("{}: {}", file.display(), e))
        })
        .collect();

    let mut summary = RenderSummary::default();
    for result in results {
        summary.processed += 1;
        match result {
            Ok(Some(headings)) => {
                summary.with_toc += 1;
                summary.headings += headings;
            }
            Ok(None) => {}
            Err(e) => {
                error!("Failed to render {}", e);
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}

/// Render a single file; returns the number of headings linked, or `None`
/// when the page has no TOC container.
fn render_file(input: &Path, destination: &Path, config: &TocConfig) -> BoxResult<Option<usize>> {
    let mut document = HtmlDocument::new(fs::read_file(input)?);

    match generate_toc(&mut document, config) {
        Some(toc) => {
            debug!("{}: {} heading(s) linked", input.display(), toc.heading_count());
            fs::write_file(destination, document.as_str())?;
            Ok(Some(toc.heading_count()))
        }
        None => {
            debug!("{}: no '#{}' container", input.display(), config.container_id);
            if destination != input {
                fs::write_file(destination, document.as_str())?;
            }
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<div id="toc"></div><h2>One</h2><h3>Two</h3>"#;

    #[test]
    fn test_render_single_file_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let page = dir.path().join("page.html");
        fs::write_file(&page, PAGE).unwrap();

        let summary = render_path(&page, None, &TocConfig::default()).unwrap();
        assert_eq!(summary, RenderSummary { processed: 1, with_toc: 1, headings: 2, failed: 0 });

        let written = fs::read_file(&page).unwrap();
        assert!(written.contains(r##"<a href="#two">Two</a>"##));
        assert!(written.contains(r#"<a id="one" class="toc-anchor"></a><h2>"#));
    }

    #[test]
    fn test_render_directory_to_output() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        fs::write_file(input.path().join("index.html"), PAGE).unwrap();
        fs::write_file(input.path().join("docs/plain.html"), "<h2>No container</h2>").unwrap();
        fs::write_file(input.path().join("docs/notes.txt"), "<h2>ignored</h2>").unwrap();

        let summary = render_path(input.path(), Some(output.path()), &TocConfig::default()).unwrap();
        assert_eq!(summary.processed, 2);
        assert_eq!(summary.with_toc, 1);
        assert_eq!(summary.headings, 2);

        // Pages without a container are copied unchanged
        let plain = fs::read_file(output.path().join("docs/plain.html")).unwrap();
        assert_eq!(plain, "<h2>No container</h2>");
        assert!(fs::read_file(output.path().join("index.html")).unwrap().contains("<ul class=\"toc\">"));

        // Input untouched
        assert_eq!(fs::read_file(input.path().join("index.html")).unwrap(), PAGE);
    }

    #[test]
    fn test_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        assert!(render_path(&dir.path().join("missing.html"), None, &TocConfig::default()).is_err());
    }
}
