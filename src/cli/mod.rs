pub mod types;
pub mod commands;
pub mod logging;

use clap::Parser;

/// Run the command-line interface
pub fn run() {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug);

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    let source = cli.source.as_ref();
    let config_files = cli.config.as_ref();

    let result = match &cli.command {
        types::Commands::Render { .. } => {
            commands::handle_render_command(&cli.command, source, config_files)
        }
        types::Commands::Outline { .. } => {
            commands::handle_outline_command(&cli.command, source, config_files)
        }
        types::Commands::Slug { .. } => commands::handle_slug_command(&cli.command),
    };

    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
