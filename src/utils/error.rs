use std::error::Error;
use std::fmt;
use std::io;

/// Common result type for TOC operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for TOC operations
#[derive(Debug)]
pub enum TocError {
    /// IO error wrapper
    Io(io::Error),
    /// Configuration error
    Config(String),
    /// Document handling error (unreadable input, unsupported path, ...)
    Document(String),
    /// Outline rendering or serialization error
    Render(String),
    /// Generic error message
    Generic(String),
}

impl fmt::Display for TocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TocError::Io(err) => write!(f, "IO error: {}", err),
            TocError::Config(msg) => write!(f, "Configuration error: {}", msg),
            TocError::Document(msg) => write!(f, "Document error: {}", msg),
            TocError::Render(msg) => write!(f, "Render error: {}", msg),
            TocError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for TocError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TocError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for TocError {
    fn from(err: io::Error) -> Self {
        TocError::Io(err)
    }
}

impl From<String> for TocError {
    fn from(msg: String) -> Self {
        TocError::Generic(msg)
    }
}

impl From<&str> for TocError {
    fn from(msg: &str) -> Self {
        TocError::Generic(msg.to_string())
    }
}
