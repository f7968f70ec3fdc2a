use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocsError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Clipboard error: {0}")]
    Clipboard(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Unknown HTTP method: {0}")]
    UnknownMethod(String),
    #[error("Snippet '{0}' not found")]
    SnippetNotFound(String),
    #[error("Language '{language}' is not available for snippet '{snippet}'")]
    LanguageNotFound { snippet: String, language: String },
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, DocsError>;
