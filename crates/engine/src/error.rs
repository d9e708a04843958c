use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),

    #[error("Failed to open file '{path}': {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line did not fit into the scan buffer. Re-run with a larger buffer.
    #[error("File '{path}' contains a line longer than the scanner buffer ({limit} bytes)")]
    LineTooLong { path: PathBuf, limit: usize },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
