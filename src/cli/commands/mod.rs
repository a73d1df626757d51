mod render;
mod outline;
mod slug;

pub use render::handle_render_command;
pub use outline::handle_outline_command;
pub use slug::handle_slug_command;

use log::debug;
use std::path::PathBuf;

use rustyll_toc::config::{self, TocConfig};
use rustyll_toc::BoxResult;

use crate::cli::types::TocArgs;

/// Load the configuration files, then apply command-line overrides
pub fn load_effective_config(
    source: Option<&PathBuf>,
    config_files: Option<&Vec<PathBuf>>,
    overrides: &TocArgs,
) -> BoxResult<TocConfig> {
    let source_dir = source.cloned().unwrap_or_else(|| PathBuf::from("."));
    let mut config = config::load_config(&source_dir, config_files.cloned())?;

    overrides.apply(&mut config);
    config::validate_config(&config)?;

    debug!("Effective configuration: {:?}", config);
    Ok(config)
}
