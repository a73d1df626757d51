use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Set the log level for the application
pub fn set_log_level(level: LevelFilter) {
    log::set_max_level(level);
}

/// Initialize logging with the specified level
pub fn init_logging(debug: bool) -> LevelFilter {
    let log_level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // A logger may already be installed (tests, embedding); keep it
    let _ = SimpleLogger::new()
        .with_level(log_level)
        .init();

    log_level
}

/// Configure backtrace if trace is enabled
pub fn configure_backtrace(trace: bool) {
    if trace {
        std::env::set_var("RUST_BACKTRACE", "1");
    }
}
