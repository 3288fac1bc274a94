//! Error types for the generative service clients.

use thiserror::Error;

/// Errors from the word-info and image-generation services.
///
/// These never escape to the UI as failures of the practice loop: the
/// word-info client converts them into fallback content, and avatar
/// generation converts them into a user notice.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No API key available in the configured environment variable.
    #[error("service not configured")]
    NotConfigured,

    /// Transport-level failure.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-success HTTP status from the service.
    #[error("service error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Response body did not match the expected structure.
    #[error("malformed response: {0}")]
    Parse(String),

    /// Structured response parsed but a required field was missing or empty.
    #[error("incomplete response: missing {0}")]
    Incomplete(&'static str),
}
