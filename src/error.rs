//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// The backend answered with `success: false` in its envelope.
    #[error("API error: {message}")]
    Api { message: String },
}

/// HTTP-layer errors.
///
/// Transport failures, timeouts and non-2xx statuses all arrive as the
/// underlying `reqwest::Error`, untouched.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Failed to serialize request body: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Timeout")]
    Timeout,

    #[error("Interceptor rejected: {0}")]
    Interceptor(String),
}

impl HttpError {
    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            #[cfg(feature = "http")]
            HttpError::Reqwest(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        match self {
            #[cfg(feature = "http")]
            HttpError::Reqwest(e) => e.is_timeout(),
            HttpError::Timeout => true,
            _ => false,
        }
    }
}
