//! Error types for lingolens-core.

use thiserror::Error;

/// Result type alias using CoreError.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised at the edges of the core: decoding collaborator payloads,
/// validating settings and talking to the speech capability.
///
/// The quiz and pronunciation engines never fail.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid detection payload: {0}")]
    InvalidDetections(String),

    #[error("confidence threshold {value} outside {min}..={max}")]
    ThresholdOutOfRange { value: f64, min: f64, max: f64 },

    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    #[error("invalid quiz session: {0}")]
    InvalidSession(String),

    #[error("speech capability failed: {0}")]
    Speech(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidDetections(err.to_string())
    }
}
