use rustyll_toc::outline::slugify;
use rustyll_toc::BoxResult;

use crate::cli::types::Commands;

/// Handle the slug command
pub fn handle_slug_command(command: &Commands) -> BoxResult<()> {
    if let Commands::Slug { text } = command {
        for line in text {
            println!("{}", slugify(line));
        }
    }
    Ok(())
}
