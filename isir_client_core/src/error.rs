//! Error types for the gateway client library

use thiserror::Error;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the gateway client library
///
/// Errors fall into four categories: HTTP transport failures, rejections
/// reported by the remote API, malformed token-endpoint responses, and
/// local I/O failures while materializing fetched files.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP transport errors (connect, TLS, timeout, body decode)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success responses from the record API
    #[error("API request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    /// Token endpoint responded without a usable access token
    #[error("authorization response did not contain an access token: {0}")]
    Token(String),

    /// Local filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Build an API error from a response status and body
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }
}
