//! Error taxonomy for the forum client.
//!
//! The only failures this crate produces itself are transport-level: a
//! request that could not be sent, or a response outside the 2xx range.
//! Neither is surfaced to the end user; callers log and move on, leaving
//! client state untouched.

use thiserror::Error;

/// Failure of a call to the forum server.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (connection, TLS, DNS, body I/O).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered outside the 2xx range.
    #[error("server returned {status} for {path}")]
    Status { status: u16, path: String },

    /// The configured base URL could not be joined with a request path.
    #[error("invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ApiError {
    /// Returns the HTTP status code, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(err) => err.status().map(|s| s.as_u16()),
            ApiError::InvalidUrl(_) => None,
        }
    }
}
