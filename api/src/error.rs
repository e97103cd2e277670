//! Error type shared by all pool API calls.

use thiserror::Error;

/// An error that can occur when talking to the pool API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never completed (DNS, TLS, connect, body, decode).
    #[error("pool API request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("pool API returned {status} for {endpoint}")]
    Status {
        status: reqwest::StatusCode,
        endpoint: &'static str,
    },
}
