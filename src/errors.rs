use thiserror::Error;

/// Error type for the strict parsers and config persistence.
///
/// The display functions never surface it; they degrade to a sentinel instead.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),
    #[error("Invalid date pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Number out of decimal range: {0}")]
    OutOfRange(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}
