//! Failure taxonomy for calls to the REST backend.

use thiserror::Error;

/// Why a request to the backend did not produce the expected result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// The request could not complete (DNS, connection refused, CORS, ...).
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("HTTP {status}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Http { status: u16, message: Option<String> },
    /// The response body was not the JSON we expected.
    #[error("invalid response body: {0}")]
    Parse(String),
    /// The request body could not be encoded.
    #[error("could not encode request: {0}")]
    Encode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Network(e.to_string())
    }
}
