//! Errors raised while talking to the media portal.

use thiserror::Error;

/// Failure of a single portal operation.
///
/// The retry layer does not distinguish between variants: every one of them
/// is retried until the policy's attempts are used up.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Network-level failure (connect, timeout, reset, body read).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The catalog response did not match the expected schema.
    #[error("Decode error: {0}")]
    Decode(String),

    /// The detail page carried no playable `video > source` element.
    #[error("Could not get URL for video {guid}")]
    NotFound { guid: String },
}

impl From<serde_json::Error> for ScrapeError {
    fn from(e: serde_json::Error) -> Self {
        ScrapeError::Decode(e.to_string())
    }
}
