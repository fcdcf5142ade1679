use thiserror::Error;

/// Errors that can occur while extracting or merging HAR snippets.
#[derive(Error, Debug)]
pub enum HarsnipError {
    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from invalid HAR or partial JSON content.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid `--filter` pattern.
    #[error("Invalid filter pattern: {0}")]
    Regex(#[from] regex::Error),

    /// Invalid command-line arguments or configuration values.
    #[error("{0}")]
    InvalidArgs(String),

    /// Input document whose shape cannot be read as a HAR log.
    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

/// Convenience result type for harsnip operations.
pub type Result<T> = std::result::Result<T, HarsnipError>;
