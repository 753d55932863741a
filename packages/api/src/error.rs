//! Transport-level errors for the board REST API.

use thiserror::Error;

/// Everything that can go wrong talking to the board server.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status. `detail` is the
    /// `{"detail": "..."}` field of the body when it had one.
    #[error("server rejected request with status {status}")]
    Rejected { status: u16, detail: Option<String> },

    /// No response was received.
    #[error("network error: {0}")]
    Network(String),

    /// A 2xx response whose body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Whether the server refused the bearer credential.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Rejected { status: 401, .. })
    }

    /// The server-provided failure message, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Whether the request never produced a response.
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}
