//! Error types for telugu-tutor.

use thiserror::Error;

/// Library-level error type.
///
/// Scoring and reordering are total functions and never produce one of
/// these; they come from configuration, link parsing and I/O at the edges.
#[derive(Error, Debug)]
pub enum TutorError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not a YouTube video link: {0}")]
    InvalidVideoUrl(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias for telugu-tutor operations.
pub type Result<T> = std::result::Result<T, TutorError>;
